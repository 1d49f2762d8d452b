use std::collections::HashMap;
use std::sync::Arc;

use leptos::logging::log;
use rusqlite::{params, Connection, Error, OptionalExtension, Row};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::listing::{Listing, ListingDetail, ListingInput};
use crate::models::review::{Review, ReviewInput};

/// Shared handle to the store. Clones point at the same connection.
#[derive(Debug, Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

fn listing_from_row(row: &Row<'_>) -> Result<Listing, Error> {
    Ok(Listing {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        image: row.get(3)?,
        price: row.get(4)?,
        location: row.get(5)?,
        country: row.get(6)?,
        reviews: Vec::new(),
    })
}

fn review_from_row(row: &Row<'_>) -> Result<Review, Error> {
    Ok(Review {
        id: row.get(0)?,
        comment: row.get(1)?,
        rating: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn review_refs(conn: &Connection, listing_id: &str) -> Result<Vec<String>, Error> {
    let mut stmt = conn.prepare(
        "SELECT review_id FROM listing_reviews WHERE listing_id = ? ORDER BY position ASC",
    )?;
    let refs = stmt.query_map([listing_id], |row| row.get(0))?;
    refs.collect()
}

impl Database {
    // Open (or create) the database file; ":memory:" gives a private in-memory store
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        log!("[DB] Connection established at: {}", db_path);
        Ok(Database {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // Create the database schema
    pub async fn create_schema(&self) -> Result<(), Error> {
        let conn = self.conn.lock().await;

        // 1. Listings table, rowid keeps insertion order
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS listings (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image TEXT NOT NULL,
                price REAL NOT NULL CHECK (price >= 0),
                location TEXT NOT NULL,
                country TEXT NOT NULL
            );",
        )
        .map_err(|e| {
            log!("[DB] Failed creating listings table: {}", e);
            e
        })?;

        // 2. Reviews table
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS reviews (
                id TEXT PRIMARY KEY,
                comment TEXT NOT NULL,
                rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                created_at TEXT NOT NULL
            );",
        )
        .map_err(|e| {
            log!("[DB] Failed creating reviews table: {}", e);
            e
        })?;

        // 3. Ordered review references held by each listing
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS listing_reviews (
                listing_id TEXT NOT NULL,
                review_id TEXT NOT NULL,
                position INTEGER NOT NULL,
                PRIMARY KEY (listing_id, review_id),
                FOREIGN KEY (listing_id) REFERENCES listings(id) ON DELETE CASCADE
            );",
        )
        .map_err(|e| {
            log!("[DB] Failed creating listing_reviews table: {}", e);
            e
        })?;
        Ok(())
    }

    // Retrieve every listing in insertion order, with its review references
    pub async fn get_listings(&self) -> Result<Vec<Listing>, Error> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, image, price, location, country
            FROM listings
            ORDER BY rowid ASC",
        )?;
        let mut listings = stmt
            .query_map([], listing_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut refs_stmt = conn.prepare(
            "SELECT listing_id, review_id FROM listing_reviews ORDER BY listing_id, position ASC",
        )?;
        let mut refs: HashMap<String, Vec<String>> = HashMap::new();
        let rows = refs_stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        for row in rows {
            let (listing_id, review_id) = row?;
            refs.entry(listing_id).or_default().push(review_id);
        }

        for listing in &mut listings {
            listing.reviews = refs.remove(&listing.id).unwrap_or_default();
        }

        log!("[DB] Fetched {} listings", listings.len());
        Ok(listings)
    }

    // Retrieve one listing with its review references, unresolved
    pub async fn get_listing(&self, id: &str) -> Result<Option<Listing>, Error> {
        let conn = self.conn.lock().await;
        let listing = conn
            .query_row(
                "SELECT id, title, description, image, price, location, country
                FROM listings WHERE id = ?",
                [id],
                listing_from_row,
            )
            .optional()?;

        match listing {
            Some(mut listing) => {
                listing.reviews = review_refs(&conn, id)?;
                Ok(Some(listing))
            }
            None => Ok(None),
        }
    }

    // Retrieve one listing with its references resolved to reviews.
    // References whose review row is gone are skipped.
    pub async fn get_listing_detail(&self, id: &str) -> Result<Option<ListingDetail>, Error> {
        let Some(listing) = self.get_listing(id).await? else {
            return Ok(None);
        };

        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT r.id, r.comment, r.rating, r.created_at
            FROM listing_reviews lr
            JOIN reviews r ON r.id = lr.review_id
            WHERE lr.listing_id = ?
            ORDER BY lr.position ASC",
        )?;
        let reviews = stmt
            .query_map([id], review_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(ListingDetail { listing, reviews }))
    }

    pub async fn get_review(&self, id: &str) -> Result<Option<Review>, Error> {
        let conn = self.conn.lock().await;
        let review = conn
            .query_row(
                "SELECT id, comment, rating, created_at FROM reviews WHERE id = ?",
                [id],
                review_from_row,
            )
            .optional()?;
        Ok(review)
    }

    // Insert a new listing from validated input
    pub async fn insert_listing(&self, input: &ListingInput) -> Result<Listing, Error> {
        let listing = Listing {
            id: Uuid::new_v4().to_string(),
            title: input.title.clone(),
            description: input.description.clone(),
            image: input.image_or_default().to_string(),
            price: input.price,
            location: input.location.clone(),
            country: input.country.clone(),
            reviews: Vec::new(),
        };

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO listings (id, title, description, image, price, location, country)
            VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                &listing.id,
                &listing.title,
                &listing.description,
                &listing.image,
                listing.price,
                &listing.location,
                &listing.country
            ],
        )?;
        log!("[DB] Listing inserted: {}", listing.id);
        Ok(listing)
    }

    // Replace every mutable field. Returns false when no listing has this id
    pub async fn update_listing(&self, id: &str, input: &ListingInput) -> Result<bool, Error> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE listings
            SET title = ?, description = ?, image = ?, price = ?, location = ?, country = ?
            WHERE id = ?",
            params![
                &input.title,
                &input.description,
                input.image_or_default(),
                input.price,
                &input.location,
                &input.country,
                id
            ],
        )?;
        log!("[DB] Listing {} updated: {}", id, changed > 0);
        Ok(changed > 0)
    }

    // Delete a listing together with the reviews it owns
    pub async fn delete_listing(&self, id: &str) -> Result<bool, Error> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let reviews = tx.execute(
            "DELETE FROM reviews
            WHERE id IN (SELECT review_id FROM listing_reviews WHERE listing_id = ?)",
            [id],
        )?;
        tx.execute("DELETE FROM listing_reviews WHERE listing_id = ?", [id])?;
        let deleted = tx.execute("DELETE FROM listings WHERE id = ?", [id])?;

        tx.commit()?;
        log!("[DB] Listing {} deleted with {} reviews", id, reviews);
        Ok(deleted > 0)
    }

    // Store a review and append it to the listing's references.
    // Returns None, writing nothing, when the listing does not exist.
    pub async fn insert_review(
        &self,
        listing_id: &str,
        input: &ReviewInput,
    ) -> Result<Option<Review>, Error> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let exists = tx
            .query_row("SELECT 1 FROM listings WHERE id = ?", [listing_id], |_| Ok(()))
            .optional()?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let review = Review {
            id: Uuid::new_v4().to_string(),
            comment: input.comment.clone(),
            rating: input.rating,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        tx.execute(
            "INSERT INTO reviews (id, comment, rating, created_at) VALUES (?, ?, ?, ?)",
            params![&review.id, &review.comment, review.rating, &review.created_at],
        )?;

        let max_position: i64 = tx.query_row(
            "SELECT COALESCE(MAX(position), 0) FROM listing_reviews WHERE listing_id = ?",
            [listing_id],
            |row| row.get(0),
        )?;
        tx.execute(
            "INSERT INTO listing_reviews (listing_id, review_id, position) VALUES (?, ?, ?)",
            params![listing_id, &review.id, max_position + 1],
        )?;

        tx.commit()?;
        log!("[DB] Review {} added to listing {}", review.id, listing_id);
        Ok(Some(review))
    }

    // Pull the reference from the listing, then drop the review itself.
    // A review owned by another listing is left alone. Returns whether anything was removed
    pub async fn delete_review(&self, listing_id: &str, review_id: &str) -> Result<bool, Error> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let pulled = tx.execute(
            "DELETE FROM listing_reviews WHERE listing_id = ? AND review_id = ?",
            [listing_id, review_id],
        )?;
        if pulled == 0 {
            log!("[DB] Review {} not referenced by listing {}", review_id, listing_id);
            return Ok(false);
        }
        tx.execute("DELETE FROM reviews WHERE id = ?", [review_id])?;

        tx.commit()?;
        log!("[DB] Review {} removed from listing {}", review_id, listing_id);
        Ok(true)
    }
}
