use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub skills: Vec<Option<String>>,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_learning_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<Option<String>>,
    pub steps: Vec<Option<String>>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub image_urls: Vec<Option<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub ingredients: &'a [Option<String>],
    pub steps: &'a [Option<String>],
    pub category: Option<&'a str>,
    pub rating: Option<f64>,
    pub image_urls: &'a [Option<String>],
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub name: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub recipe_id: Uuid,
    pub name: &'a str,
    pub comment: &'a str,
    pub rating: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::techniques)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Technique {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub difficulty_level: String,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::techniques)]
pub struct NewTechnique<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub difficulty_level: &'a str,
    pub tags: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::meals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Meal {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::meals)]
pub struct NewMeal<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_follows)]
pub struct NewUserFollow {
    pub follower_id: Uuid,
    pub followed_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::learning_dates)]
pub struct NewLearningDate {
    pub user_id: Uuid,
    pub learned_on: NaiveDate,
}
