use actix_web::web::block;
use chrono::{DateTime, Utc};
use diesel::SqliteConnection;

use db::{
    models::{Choice, Question},
    Connection,
};
use errors::Error;

use super::QuestionContext;

pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

pub enum VoteOutcome {
    Counted(Choice),
    /// The detail page to show again, carrying an error message.
    Rejected(QuestionContext),
}

fn reject(conn: &mut SqliteConnection, question: Question) -> Result<VoteOutcome, Error> {
    let choices = Choice::find_by_question(conn, &question)?;

    Ok(VoteOutcome::Rejected(QuestionContext {
        question,
        choices,
        error_message: Some(NO_CHOICE_SELECTED.to_string()),
    }))
}

/// Records a vote for `choice_id` on a published question. A missing choice,
/// or one that belongs to another question, is rejected rather than treated
/// as an error.
pub async fn cast_vote(
    mut connection: Connection,
    question_id: i32,
    choice_id: Option<i32>,
    now: DateTime<Utc>,
) -> Result<VoteOutcome, Error> {
    block(move || -> Result<VoteOutcome, Error> {
        let question = Question::find_published(&mut connection, question_id, now)?;

        let choice_id = match choice_id {
            Some(choice_id) => choice_id,
            None => return reject(&mut connection, question),
        };

        match Choice::vote(&mut connection, question.id, choice_id) {
            Ok(choice) => {
                info!(
                    "Vote counted for choice {} on question {}",
                    choice.id, question.id
                );
                Ok(VoteOutcome::Counted(choice))
            }
            Err(Error::NotFound(_)) => reject(&mut connection, question),
            Err(err) => Err(err),
        }
    })
    .await?
}
