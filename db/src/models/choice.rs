use diesel::{
    self, BelongingToDsl, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl,
    SqliteConnection,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices::{self, table};

#[derive(
    Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize,
)]
#[diesel(belongs_to(Question))]
#[diesel(table_name = choices)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[diesel(table_name = choices)]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &mut SqliteConnection,
        question_id: i32,
        choice_text: impl Into<String>,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(table)
            .values(NewChoice {
                question_id,
                choice_text: choice_text.into(),
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question(
        conn: &mut SqliteConnection,
        question: &Question,
    ) -> Result<Vec<Choice>, Error> {
        use choices::dsl::id;

        let results = Choice::belonging_to(question)
            .order(id.asc())
            .load::<Choice>(conn)?;

        Ok(results)
    }

    /// Adds one vote to `choice_id`, provided it belongs to `question_id`.
    /// The increment happens in SQL so concurrent votes are not lost.
    pub fn vote(
        conn: &mut SqliteConnection,
        question_id: i32,
        choice_id: i32,
    ) -> Result<Choice, Error> {
        use choices::dsl::{id, question_id as question_id_field, votes};

        diesel::update(
            table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .get_result::<Choice>(conn)
        .optional()?
        .ok_or_else(|| {
            Error::NotFound(format!(
                "No choice {} found for question {}",
                choice_id, question_id
            ))
        })
    }
}
