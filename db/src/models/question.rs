use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use diesel::{
    self, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SqliteConnection,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    /// Stored in UTC.
    pub pub_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: NaiveDateTime,
}

impl Question {
    /// Builds a question that has not been saved. Its `id` is 0 until it is
    /// persisted through `Question::create`.
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Question {
            id: 0,
            question_text: question_text.into(),
            pub_date: pub_date.naive_utc(),
        }
    }

    pub fn pub_date_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.pub_date)
    }

    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date_utc() <= now
    }

    /// True when the question went live within the day leading up to `now`.
    /// Future questions are never recent.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        let pub_date = self.pub_date_utc();
        now - Duration::days(1) < pub_date && pub_date <= now
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    pub fn create(
        conn: &mut SqliteConnection,
        question_text: impl Into<String>,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text: question_text.into(),
                pub_date: pub_date.naive_utc(),
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// Questions visible at `now`, most recently published first. Equal
    /// publish dates fall back to the newest id.
    pub fn published(
        conn: &mut SqliteConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now.naive_utc()))
            .order((pub_date.desc(), id.desc()))
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Looks up a question that is visible at `now`. Missing and future
    /// questions are both reported as not found.
    pub fn find_published(
        conn: &mut SqliteConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        questions_table
            .filter(id.eq(question_id))
            .filter(pub_date.le(now.naive_utc()))
            .first::<Question>(conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("No question found with id {}", question_id)))
    }
}
