pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_edit, prompt_field, prompt_headcount, prompt_share, prompt_vibe, Field,
};
pub use render::{
    display_estimate, display_presets, render_table, summary_line, write_csv, write_json,
    DISCLAIMER,
};
