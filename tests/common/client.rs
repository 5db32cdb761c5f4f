//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all movie API endpoints.
//!
//! When API routes or request formats change, update only this file.
#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Server Endpoints
    // ========================================================================

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect("Home request failed")
    }

    // ========================================================================
    // Catalog Endpoints
    // ========================================================================

    /// GET /api/movies
    pub async fn get_all_movies(&self) -> Response {
        self.client
            .get(self.url("/api/movies"))
            .send()
            .await
            .expect("Get all movies request failed")
    }

    /// GET /api/movies/{id}
    pub async fn get_movie(&self, id: u32) -> Response {
        self.client
            .get(self.url(&format!("/api/movies/{}", id)))
            .send()
            .await
            .expect("Get movie request failed")
    }

    /// GET /api/movies/genres
    pub async fn get_genres(&self) -> Response {
        self.client
            .get(self.url("/api/movies/genres"))
            .send()
            .await
            .expect("Get genres request failed")
    }

    /// POST /api/movies/refresh
    pub async fn refresh(&self) -> Response {
        self.client
            .post(self.url("/api/movies/refresh"))
            .send()
            .await
            .expect("Refresh request failed")
    }

    // ========================================================================
    // Query Endpoints
    // ========================================================================

    /// GET /api/movies/search with the given query parameters
    pub async fn search(&self, params: &[(&str, &str)]) -> Response {
        self.client
            .get(self.url("/api/movies/search"))
            .query(params)
            .send()
            .await
            .expect("Search request failed")
    }

    /// GET /api/movies/sort?sortType=...
    pub async fn sort(&self, sort_type: Option<&str>) -> Response {
        let mut request = self.client.get(self.url("/api/movies/sort"));
        if let Some(sort_type) = sort_type {
            request = request.query(&[("sortType", sort_type)]);
        }
        request.send().await.expect("Sort request failed")
    }

    /// PUT /api/movies/default-sort
    pub async fn set_default_sort(&self, sort_type: &str) -> Response {
        self.client
            .put(self.url("/api/movies/default-sort"))
            .json(&json!({ "sortType": sort_type }))
            .send()
            .await
            .expect("Default sort request failed")
    }

    /// GET /api/movies/top?n=...
    pub async fn top(&self, n: i64) -> Response {
        self.client
            .get(self.url("/api/movies/top"))
            .query(&[("n", n)])
            .send()
            .await
            .expect("Top request failed")
    }

    // ========================================================================
    // Community Endpoints
    // ========================================================================

    /// POST /api/movies/{id}/comment
    pub async fn add_comment(&self, id: u32, comment: &str) -> Response {
        self.client
            .post(self.url(&format!("/api/movies/{}/comment", id)))
            .body(comment.to_string())
            .send()
            .await
            .expect("Comment request failed")
    }

    /// POST /api/movies/{id}/rating
    pub async fn add_rating(&self, id: u32, rating: &str) -> Response {
        self.client
            .post(self.url(&format!("/api/movies/{}/rating", id)))
            .body(rating.to_string())
            .send()
            .await
            .expect("Rating request failed")
    }

    // ========================================================================
    // Export Endpoints
    // ========================================================================

    /// GET /api/movies/export?format=...
    pub async fn export(&self, format: Option<&str>) -> Response {
        let mut request = self.client.get(self.url("/api/movies/export"));
        if let Some(format) = format {
            request = request.query(&[("format", format)]);
        }
        request.send().await.expect("Export request failed")
    }
}

/// Titles of a JSON array of movies, in order.
pub async fn titles(response: Response) -> Vec<String> {
    let movies: serde_json::Value = response.json().await.expect("Body is not JSON");
    movies
        .as_array()
        .expect("Body is not an array")
        .iter()
        .map(|m| m["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
