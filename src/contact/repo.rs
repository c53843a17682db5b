use sqlx::PgPool;
use uuid::Uuid;

use crate::contact::dto::ContactForm;

pub async fn insert_request(db: &PgPool, form: &ContactForm) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO contact_requests (id, name, email, phone, beer_type, quantity, occasion, message)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(&form.name)
    .bind(&form.email)
    .bind(&form.phone)
    .bind(&form.beer_type)
    .bind(&form.quantity)
    .bind(&form.occasion)
    .bind(&form.message)
    .execute(db)
    .await?;
    Ok(id)
}
