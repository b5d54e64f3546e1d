use crate::domain::Listing;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

/// All listings owned by `seller_id`, oldest first.
pub fn seller_listings(conn: &Connection, seller_id: i64) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select id, title, street, city, state, zip, price, status
            from listings
            where seller_id = ?
            order by created_at, id
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![seller_id], |row| {
            Ok(Listing {
                id: row.get(0)?,
                title: row.get(1)?,
                street: row.get(2)?,
                city: row.get(3)?,
                state: row.get(4)?,
                zip: row.get(5)?,
                price: row.get(6)?,
                status: row.get(7)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
