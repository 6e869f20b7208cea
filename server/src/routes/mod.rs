use actix_web::{web, HttpRequest, HttpResponse};

use errors::{Error, ErrorResponse};

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .service(
                web::resource("/")
                    .name("polls:index")
                    .route(web::get().to(polls::index)),
            )
            .service(
                web::resource("/{id}/")
                    .name("polls:detail")
                    .route(web::get().to(polls::detail)),
            )
            .service(
                web::resource("/{id}/results/")
                    .name("polls:results")
                    .route(web::get().to(polls::results)),
            )
            .service(
                web::resource("/{id}/vote/")
                    .name("polls:vote")
                    .route(web::post().to(polls::vote)),
            ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

/// Path of the named question route, e.g. `polls:detail` -> `/polls/1/`.
pub fn question_url(req: &HttpRequest, name: &str, question_id: i32) -> Result<String, Error> {
    let url = req
        .url_for(name, &[question_id.to_string()])
        .map_err(|err| Error::InternalServerError(err.to_string()))?;

    Ok(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use errors::ErrorResponse;

    use crate::tests::helpers::tests::{create_question, get_pool, test_get};

    #[actix_rt::test]
    async fn test_unknown_route_is_not_found() {
        let pool = get_pool();

        let res = test_get(&pool, "/questions/").await;
        assert_eq!(res.status, 404);

        let body: ErrorResponse = serde_json::from_str(&res.body).unwrap();
        assert_eq!(body.errors, vec!["Not Found".to_string()]);
    }

    #[actix_rt::test]
    async fn test_index_without_trailing_slash() {
        let pool = get_pool();

        let res = test_get(&pool, "/polls").await;
        assert_eq!(res.status, 200);
        assert!(res.body.contains("No polls are available."));
    }

    #[actix_rt::test]
    async fn test_question_pages_without_trailing_slash() {
        let pool = get_pool();
        let question = create_question(&pool, "Past question.", -3);

        let res = test_get(&pool, &format!("/polls/{}", question.id)).await;
        assert_eq!(res.status, 200);
        assert!(res.body.contains("Past question."));

        let res = test_get(&pool, &format!("/polls/{}/results", question.id)).await;
        assert_eq!(res.status, 200);
        assert!(res.body.contains("Past question."));
    }
}
