use actix_web::web::block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question},
    Connection,
};
use errors::Error;

/// Shared by the detail and results pages.
#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionContext {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub error_message: Option<String>,
}

pub async fn get_question_page(
    mut connection: Connection,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<QuestionContext, Error> {
    block(move || -> Result<QuestionContext, Error> {
        let question = Question::find_published(&mut connection, question_id, now)?;
        let choices = Choice::find_by_question(&mut connection, &question)?;

        Ok(QuestionContext {
            question,
            choices,
            error_message: None,
        })
    })
    .await?
}
