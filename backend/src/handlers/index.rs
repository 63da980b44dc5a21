//! Landing page listing the available routes

use axum::response::Html;

const ROUTES_PAGE: &str = "Available Routes:<br/>\
<br/>\
/api/v1.0/precipitation<br/>\
- List of precipitation<br/>\
<br/>\
/api/v1.0/stations<br/>\
- List of Stations<br/>\
<br/>\
/api/v1.0/tobs<br/>\
- List of the dates and temperature observations from a year from the last data point<br/>\
<br/>\
/api/v1.0/start<br/>\
- When given the start date (YYYY-MM-DD), calculates the MIN/AVG/MAX temperature for all dates greater than and equal to the start date<br/>\
<br/>\
/api/v1.0/start/end<br/>\
- When given the start and the end date (YYYY-MM-DD), calculate the MIN/AVG/MAX temperature for dates between the start and end date inclusive<br/><br/>\
Examples of start or start-end range.:<br/>\
<br/>\
/api/v1.0/2016-08-23<br/>\
/api/v1.0/2016-08-23/2017-08-23";

/// List all available api routes
pub async fn index() -> Html<&'static str> {
    Html(ROUTES_PAGE)
}
