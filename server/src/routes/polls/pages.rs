use actix_web::HttpRequest;
use serde::Serialize;

use db::models::Question;
use errors::Error;

use crate::handlers::{IndexContext, QuestionContext};
use crate::routes::question_url;

#[derive(Serialize)]
pub struct QuestionLink<'a> {
    pub question: &'a Question,
    pub detail_url: String,
}

/// What `polls/index.html` renders.
#[derive(Serialize)]
pub struct IndexPage<'a> {
    pub latest_question_list: Vec<QuestionLink<'a>>,
}

impl<'a> IndexPage<'a> {
    pub fn new(req: &HttpRequest, context: &'a IndexContext) -> Result<Self, Error> {
        let latest_question_list = context
            .latest_question_list
            .iter()
            .map(|question| -> Result<QuestionLink<'a>, Error> {
                Ok(QuestionLink {
                    question,
                    detail_url: question_url(req, "polls:detail", question.id)?,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(IndexPage {
            latest_question_list,
        })
    }
}

/// What `polls/detail.html` and `polls/results.html` render.
#[derive(Serialize)]
pub struct QuestionPage<'a> {
    #[serde(flatten)]
    pub context: &'a QuestionContext,
    pub detail_url: String,
    pub results_url: String,
    pub vote_url: String,
}

impl<'a> QuestionPage<'a> {
    pub fn new(req: &HttpRequest, context: &'a QuestionContext) -> Result<Self, Error> {
        let question_id = context.question.id;

        Ok(QuestionPage {
            context,
            detail_url: question_url(req, "polls:detail", question_id)?,
            results_url: question_url(req, "polls:results", question_id)?,
            vote_url: question_url(req, "polls:vote", question_id)?,
        })
    }
}
