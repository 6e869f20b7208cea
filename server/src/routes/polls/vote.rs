use actix_web::{
    http::header,
    web::{Data, Form, Path},
    HttpRequest, HttpResponse, Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::{cast_vote, VoteOutcome};
use crate::routes::question_url;
use crate::templates::Templates;

use super::QuestionPage;

#[derive(Deserialize, Serialize)]
pub struct VoteParams {
    pub choice: Option<String>,
}

impl VoteParams {
    /// Anything that is not a choice id counts as no selection.
    fn choice_id(&self) -> Option<i32> {
        self.choice
            .as_ref()
            .and_then(|choice| choice.trim().parse().ok())
    }
}

pub async fn vote(
    req: HttpRequest,
    question_id: Path<i32>,
    params: Form<VoteParams>,
    pool: Data<DbPool>,
    templates: Data<Templates>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let connection = get_conn(&pool)?;

    match cast_vote(connection, question_id, params.choice_id(), Utc::now()).await? {
        VoteOutcome::Counted(choice) => {
            let location = question_url(&req, "polls:results", choice.question_id)?;

            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish())
        }
        VoteOutcome::Rejected(context) => {
            templates.respond("polls/detail.html", &QuestionPage::new(&req, &context)?)
        }
    }
}
