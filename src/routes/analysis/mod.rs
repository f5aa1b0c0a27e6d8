use crate::configuration::Settings;
use crate::domain::{BRANCHES, BranchReport, City, MockDistance, Outcome, Point, nearest_branch};
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{HttpResponse, web};
use anyhow::Context;
use chrono::{DateTime, Utc};

mod error;
mod template;

pub use error::AnalysisError;

#[derive(serde::Deserialize, Debug)]
pub struct SelectionQuery {
    city: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct CityEntry {
    pub name: String,
    pub coordinates: Point,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ClosestResponse {
    pub city: String,
    pub closest_address: String,
    pub closest_distance_km: f64,
    pub chosen_branch_distance_km: f64,
    pub outcome: Outcome,
    pub message: String,
    pub computed_at: DateTime<Utc>,
}

impl ClosestResponse {
    pub fn new(report: &BranchReport, computed_at: DateTime<Utc>) -> Self {
        Self {
            city: report.city.to_string(),
            closest_address: report.closest_address.to_string(),
            closest_distance_km: report.closest_distance_km,
            chosen_branch_distance_km: report.chosen_branch_distance_km,
            outcome: report.outcome,
            message: report.message(),
            computed_at,
        }
    }
}

/// A missing selection falls back to the selector's initial value.
fn selected_city(query: &SelectionQuery) -> Result<City, AnalysisError> {
    match query.city.as_deref() {
        None => Ok(City::default()),
        Some(name) => Ok(City::parse(name)?),
    }
}

/// Nearest branch to the city, compared against one draw of the mock distance.
#[tracing::instrument(name = "Computing the nearest branch", skip_all, fields(city = %city))]
pub fn analyse(city: City, mock: &dyn MockDistance) -> Result<BranchReport, AnalysisError> {
    let nearest = nearest_branch(city.location(), &BRANCHES)
        .context("There are no branches to compare against.")?;

    if !nearest.distance_km.is_finite() {
        return Err(anyhow::anyhow!(
            "Geodesic distance from {} to {} is not finite: {}",
            city,
            nearest.branch.address,
            nearest.distance_km
        )
        .into());
    }

    let report = BranchReport::new(city, nearest, mock.draw());
    tracing::info!(
        closest_address = %report.closest_address,
        closest_distance_km = report.closest_distance_km,
        chosen_branch_distance_km = report.chosen_branch_distance_km,
        outcome = ?report.outcome,
        "Nearest branch computed"
    );

    Ok(report)
}

pub async fn index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/analysis"))
        .finish()
}

#[tracing::instrument(
    name = "Rendering the analysis page",
    skip(query, settings, mock),
    fields(selected_city = ?query.city)
)]
pub async fn page(
    query: web::Query<SelectionQuery>,
    settings: web::Data<Settings>,
    mock: web::Data<dyn MockDistance>,
) -> Result<HttpResponse, AnalysisError> {
    let city = selected_city(&query)?;
    let report = analyse(city, mock.get_ref())?;
    let body = template::render(&settings.map, &report)
        .context("Failed to render the analysis page.")?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[tracing::instrument(name = "Get all cities")]
pub async fn cities() -> HttpResponse {
    let cities = City::ALL
        .iter()
        .map(|city| CityEntry {
            name: city.name().to_string(),
            coordinates: city.location(),
        })
        .collect::<Vec<_>>();

    HttpResponse::Ok().json(cities)
}

#[tracing::instrument(
    name = "Get the nearest branch",
    skip(query, mock),
    fields(selected_city = ?query.city)
)]
pub async fn closest(
    query: web::Query<SelectionQuery>,
    mock: web::Data<dyn MockDistance>,
) -> Result<HttpResponse, AnalysisError> {
    let city = selected_city(&query)?;
    let report = analyse(city, mock.get_ref())?;

    Ok(HttpResponse::Ok().json(ClosestResponse::new(&report, Utc::now())))
}
