use actix_files::NamedFile;
use actix_web::http::header;
use actix_web::{get, head, web, HttpRequest, HttpResponse};
use log::{error, info, warn};
use std::io;
use std::path::PathBuf;

use crate::config::LatestSource;
use crate::errors::MagazineError;
use crate::models::archive::{build_archive, most_recent, ArchiveEntry};
use crate::models::magazine::LatestMagazine;
use crate::state::AppState;
use crate::utils;

fn not_available(year: i32, month: &str) -> MagazineError {
    MagazineError::NotFound(format!("PDF file not available for {} {}", month, year))
}

/// Finds the PDF for `(year, month)` on the blocking pool.
async fn locate_pdf(
    state: &web::Data<AppState>,
    year: i32,
    month: &str,
) -> Result<PathBuf, MagazineError> {
    let pdfs = state.pdfs.clone();
    let token = month.to_string();
    let located = web::block(move || pdfs.locate(year, &token))
        .await
        .map_err(|e| {
            error!("Blocking task failed for {}/{}: {:?}", year, month, e);
            MagazineError::request_failed()
        })?;

    match located {
        Ok(Some(path)) => Ok(path),
        Ok(None) => {
            warn!("PDF file not found for {}/{}", year, month);
            Err(not_available(year, month))
        }
        Err(e) => {
            error!("Error locating PDF for {}/{}: {:?}", year, month, e);
            Err(MagazineError::request_failed())
        }
    }
}

/// A file can vanish between the existence check and the read.
fn read_failure(err: io::Error, year: i32, month: &str) -> MagazineError {
    if err.kind() == io::ErrorKind::NotFound {
        warn!("PDF file for {}/{} disappeared before it was read", year, month);
        not_available(year, month)
    } else {
        error!("Error reading PDF for {}/{}: {:?}", year, month, err);
        MagazineError::request_failed()
    }
}

async fn load_archive(state: &web::Data<AppState>) -> Result<Vec<ArchiveEntry>, MagazineError> {
    let pdfs = state.pdfs.clone();
    let locations = web::block(move || pdfs.scan())
        .await
        .map_err(|e| {
            error!("Blocking task failed while scanning the archive: {:?}", e);
            MagazineError::archive_failed()
        })?
        .map_err(|e| {
            error!("Error retrieving magazine archive: {:?}", e);
            MagazineError::archive_failed()
        })?;

    let config = &state.config;
    Ok(build_archive(
        &locations,
        &config.magazine,
        &config.categories,
        &config.route_prefix,
    ))
}

#[get("/magazines")]
pub async fn list_magazines(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.list())
}

#[get("/magazines/latest")]
pub async fn latest_magazine(state: web::Data<AppState>) -> Result<HttpResponse, MagazineError> {
    let latest = match state.config.latest_source {
        LatestSource::Catalog => state.catalog.latest(),
        LatestSource::Archive => match most_recent(load_archive(&state).await?) {
            Some(entry) => LatestMagazine::from(entry),
            None => {
                info!("Archive is empty, falling back to the catalog's latest issue");
                state.catalog.latest()
            }
        },
    };

    Ok(HttpResponse::Ok().json(latest))
}

#[get("/magazines/archive")]
pub async fn magazine_archive(state: web::Data<AppState>) -> Result<HttpResponse, MagazineError> {
    let archive = load_archive(&state).await?;
    info!("Magazine archive listed {} issues", archive.len());
    Ok(HttpResponse::Ok().json(archive))
}

#[get("/magazines/{id}")]
pub async fn magazine_detail(
    id: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, MagazineError> {
    let magazine = state.catalog.find(id.into_inner())?;
    Ok(HttpResponse::Ok().json(magazine))
}

#[get("/magazines/{year}/{month}/pdf")]
pub async fn download_pdf(
    path: web::Path<(i32, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, MagazineError> {
    let (year, month) = path.into_inner();
    info!("PDF download requested for {}/{}", year, month);

    let file_path = locate_pdf(&state, year, &month).await?;
    let bytes = tokio::fs::read(&file_path)
        .await
        .map_err(|e| read_failure(e, year, &month))?;
    let file_name = state.config.magazine.download_file_name(year, &month);

    info!("Successfully served PDF download for {}/{}", year, month);
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(utils::attachment(file_name))
        .body(bytes))
}

#[get("/magazines/{year}/{month}/pdf/view")]
pub async fn view_pdf(
    req: HttpRequest,
    path: web::Path<(i32, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, MagazineError> {
    let (year, month) = path.into_inner();
    info!("PDF view requested for {}/{}", year, month);

    let file_path = locate_pdf(&state, year, &month).await?;
    let named_file = NamedFile::open_async(&file_path)
        .await
        .map_err(|e| read_failure(e, year, &month))?
        .set_content_disposition(utils::inline());

    // NamedFile guesses the type from the extension; the configured file
    // name is not required to end in `.pdf`.
    let mut response = named_file.into_response(&req);
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/pdf"),
    );

    info!("Successfully served PDF view for {}/{}", year, month);
    Ok(response)
}

#[head("/magazines/{year}/{month}/pdf")]
pub async fn check_pdf(path: web::Path<(i32, String)>, state: web::Data<AppState>) -> HttpResponse {
    let (year, month) = path.into_inner();
    let pdfs = state.pdfs.clone();
    let token = month.clone();

    match web::block(move || pdfs.exists(year, &token)).await {
        Ok(Ok(true)) => HttpResponse::Ok().finish(),
        Ok(Ok(false)) => HttpResponse::NotFound().finish(),
        Ok(Err(e)) => {
            error!("Error checking PDF existence for {}/{}: {:?}", year, month, e);
            HttpResponse::InternalServerError().finish()
        }
        Err(e) => {
            error!("Blocking task failed for {}/{}: {:?}", year, month, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
