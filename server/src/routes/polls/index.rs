use actix_web::{web::Data, HttpRequest, HttpResponse, Result};
use chrono::Utc;

use db::{get_conn, DbPool};
use errors::Error;

use crate::handlers::get_latest_questions;
use crate::templates::Templates;

use super::IndexPage;

pub async fn index(
    req: HttpRequest,
    pool: Data<DbPool>,
    templates: Data<Templates>,
) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let context = get_latest_questions(connection, Utc::now()).await?;

    templates.respond("polls/index.html", &IndexPage::new(&req, &context)?)
}
