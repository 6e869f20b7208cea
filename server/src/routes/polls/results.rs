use actix_web::{
    web::{Data, Path},
    HttpRequest, HttpResponse, Result,
};
use chrono::Utc;

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::get_question_page;
use crate::templates::Templates;

use super::QuestionPage;

pub async fn results(
    req: HttpRequest,
    question_id: Path<i32>,
    pool: Data<DbPool>,
    templates: Data<Templates>,
) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let context = get_question_page(connection, question_id.into_inner(), Utc::now()).await?;

    templates.respond("polls/results.html", &QuestionPage::new(&req, &context)?)
}
