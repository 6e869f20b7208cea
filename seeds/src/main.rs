#[macro_use]
extern crate log;

use std::env;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{
    get_conn, new_pool,
    models::{Choice, Question},
};
use errors::Error;

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;
    let pool = new_pool(&database_url)?;
    let mut conn = get_conn(&pool)?;
    let now = Utc::now();

    // (text, days from now, choices)
    let questions: &[(&str, i64, &[&str])] = &[
        ("What's new?", -1, &["Not much", "The sky", "Just hacking again"]),
        ("Favourite language?", -7, &["Rust", "Python", "Go"]),
        ("Tabs or spaces?", -30, &["Tabs", "Spaces"]),
        ("Next meetup topic?", 14, &["Async", "Embedded", "Web"]),
    ];

    for (question_text, days, choices) in questions {
        let question = Question::create(&mut conn, *question_text, now + Duration::days(*days))?;
        for choice_text in choices.iter() {
            Choice::create(&mut conn, question.id, *choice_text)?;
        }
        info!(
            "Seeded question {} with {} choices",
            question.id,
            choices.len()
        );
    }

    Ok(())
}
