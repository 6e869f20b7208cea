table! {
    choices (id) {
        id -> Integer,
        question_id -> Integer,
        choice_text -> Text,
        votes -> Integer,
    }
}

table! {
    questions (id) {
        id -> Integer,
        question_text -> Text,
        pub_date -> Timestamp,
    }
}

joinable!(choices -> questions (question_id));

allow_tables_to_appear_in_same_query!(choices, questions);
