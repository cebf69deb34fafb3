/*
 * Copyright 2025 Oxide Computer Company
 */

use super::prelude::*;

fn asset_response(
    data: String,
    content_type: &str,
) -> DSResult<Response<Body>> {
    Response::builder()
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, data.as_bytes().len())
        .body(Body::from(data))
        .or_500()
}

#[endpoint {
    method = GET,
    path = "/",
    unpublished = true,
}]
pub(crate) async fn home(
    rqctx: RequestContext<Arc<Central>>,
) -> DSResult<Response<Body>> {
    let c = rqctx.context();
    let log = &rqctx.log;

    info!(log, "home page requested");

    asset_response(c.templates.load("www/index.html")?, "text/html")
}

#[endpoint {
    method = GET,
    path = "/js/main.js",
    unpublished = true,
}]
pub(crate) async fn asset_main_js(
    rqctx: RequestContext<Arc<Central>>,
) -> DSResult<Response<Body>> {
    let c = rqctx.context();

    asset_response(
        c.templates.load("www/js/main.js")?,
        "application/javascript",
    )
}

#[endpoint {
    method = GET,
    path = "/api/projects",
}]
pub(crate) async fn projects_list(
    rqctx: RequestContext<Arc<Central>>,
) -> DSResult<HttpResponseOk<Vec<projects::Project>>> {
    let log = &rqctx.log;

    let listing = projects::listing();
    info!(log, "project listing requested"; "count" => listing.len());

    Ok(HttpResponseOk(listing))
}
