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

pub async fn detail(
    req: HttpRequest,
    question_id: Path<i32>,
    pool: Data<DbPool>,
    templates: Data<Templates>,
) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let context = get_question_page(connection, question_id.into_inner(), Utc::now()).await?;

    templates.respond("polls/detail.html", &QuestionPage::new(&req, &context)?)
}

#[cfg(test)]
mod tests {
    use errors::ErrorResponse;

    use crate::tests::helpers::tests::{create_choice, create_question, get_pool, test_get};

    #[actix_rt::test]
    async fn test_future_question() {
        let pool = get_pool();
        let future_question = create_question(&pool, "Future question.", 30);

        let res = test_get(&pool, &format!("/polls/{}/", future_question.id)).await;
        assert_eq!(res.status, 404);
        assert!(!res.body.contains("Future question."));
    }

    #[actix_rt::test]
    async fn test_past_question() {
        let pool = get_pool();
        let past_question = create_question(&pool, "Past Question.", -30);

        let res = test_get(&pool, &format!("/polls/{}/", past_question.id)).await;
        assert_eq!(res.status, 200);
        assert!(res.body.contains(&past_question.question_text));
    }

    #[actix_rt::test]
    async fn test_missing_question() {
        let pool = get_pool();

        let res = test_get(&pool, "/polls/999/").await;
        assert_eq!(res.status, 404);

        let body: ErrorResponse = serde_json::from_str(&res.body).unwrap();
        assert_eq!(body.errors, vec!["No question found with id 999".to_string()]);
    }

    #[actix_rt::test]
    async fn test_lists_choices_as_vote_form() {
        let pool = get_pool();
        let question = create_question(&pool, "Best season?", -2);
        let summer = create_choice(&pool, &question, "Summer");
        let winter = create_choice(&pool, &question, "Winter");

        let res = test_get(&pool, &format!("/polls/{}/", question.id)).await;
        assert_eq!(res.status, 200);
        assert!(res
            .body
            .contains(&format!("action=\"/polls/{}/vote/\"", question.id)));
        assert!(res.body.contains(&format!("value=\"{}\"", summer.id)));
        assert!(res.body.contains(&format!("value=\"{}\"", winter.id)));
        assert!(res.body.contains("Summer"));
        assert!(res.body.contains("Winter"));
        assert!(!res.body.contains("select a choice"));
    }

    #[actix_rt::test]
    async fn test_non_numeric_id_is_not_found() {
        let pool = get_pool();

        let res = test_get(&pool, "/polls/abc/").await;
        assert_eq!(res.status, 404);
    }
}
