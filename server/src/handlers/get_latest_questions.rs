use actix_web::web::block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{models::Question, Connection};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexContext {
    pub latest_question_list: Vec<Question>,
}

pub async fn get_latest_questions(
    mut connection: Connection,
    now: DateTime<Utc>,
) -> Result<IndexContext, Error> {
    let latest_question_list =
        block(move || Question::published(&mut connection, now)).await??;

    Ok(IndexContext {
        latest_question_list,
    })
}
