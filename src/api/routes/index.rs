//! Index Route
//!
//! - GET / - Plain-text list of available routes

/// GET /
pub async fn index() -> &'static str {
    tracing::debug!("Server received request for index page");

    "Available Routes:\n\
     /api/v1.0/precipitation\n\
     /api/v1.0/stations\n\
     /api/v1.0/tobs\n\
     /api/v1.0/<start>\n\
     /api/v1.0/<start>/<end>\n"
}
