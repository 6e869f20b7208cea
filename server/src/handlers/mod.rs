mod cast_vote;
mod get_latest_questions;
mod get_question_page;

pub use self::cast_vote::*;
pub use self::get_latest_questions::*;
pub use self::get_question_page::*;
