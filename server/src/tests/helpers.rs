#[cfg(test)]
pub mod tests {
    use actix_web::{
        http::header,
        middleware::{NormalizePath, TrailingSlash},
        test,
        web::{self, Data},
        App,
    };
    use chrono::{Duration, Utc};
    use serde::Serialize;

    use db::{
        get_conn, in_memory_pool,
        models::{Choice, Question},
        DbPool,
    };

    use crate::routes::{not_found, routes};
    use crate::templates::Templates;

    pub struct TestResponse {
        pub status: u16,
        pub location: Option<String>,
        pub body: String,
    }

    pub fn get_pool() -> DbPool {
        in_memory_pool().unwrap()
    }

    /// Creates a question published `days` from now. Negative values land in
    /// the past.
    pub fn create_question(pool: &DbPool, question_text: &str, days: i64) -> Question {
        let mut conn = get_conn(pool).unwrap();
        Question::create(&mut conn, question_text, Utc::now() + Duration::days(days)).unwrap()
    }

    pub fn create_choice(pool: &DbPool, question: &Question, choice_text: &str) -> Choice {
        let mut conn = get_conn(pool).unwrap();
        Choice::create(&mut conn, question.id, choice_text).unwrap()
    }

    pub fn get_choices(pool: &DbPool, question: &Question) -> Vec<Choice> {
        let mut conn = get_conn(pool).unwrap();
        Choice::find_by_question(&mut conn, question).unwrap()
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get(pool: &DbPool, route: &str) -> TestResponse {
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::new(TrailingSlash::Always))
                .app_data(Data::new(pool.clone()))
                .app_data(Data::new(Templates::new().unwrap()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri(route).to_request();
        let res = test::call_service(&app, req).await;

        read_response(res).await
    }

    /// Helper for form POST integration tests
    pub async fn test_post_form<T: Serialize>(
        pool: &DbPool,
        route: &str,
        params: &T,
    ) -> TestResponse {
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::new(TrailingSlash::Always))
                .app_data(Data::new(pool.clone()))
                .app_data(Data::new(Templates::new().unwrap()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(route)
            .set_form(params)
            .to_request();
        let res = test::call_service(&app, req).await;

        read_response(res).await
    }

    async fn read_response<B>(res: actix_web::dev::ServiceResponse<B>) -> TestResponse
    where
        B: actix_web::body::MessageBody,
    {
        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| panic!("response body was not utf-8, status: {}", status));

        TestResponse {
            status,
            location,
            body,
        }
    }
}
