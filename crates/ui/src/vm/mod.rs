mod markdown_vm;
mod practice_vm;
mod review_vm;
mod time_fmt;

pub use markdown_vm::{looks_like_markdown, markdown_to_html, render_ai_text, sanitize_html};
pub use practice_vm::PracticeVm;
pub use review_vm::{ReviewEffect, ReviewIntent, ReviewVm};
pub use time_fmt::clock_time;
