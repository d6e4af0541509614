use actix_web::web;

include!(concat!(env!("OUT_DIR"), "/generated.rs"));

/// Serves the trunk bundle of the site. Unknown paths resolve to `index.html` so the site's
/// router can handle deep links such as `/watch/content-1`.
pub fn register_static_files(app: &mut web::ServiceConfig) {
    let bundle = generate();

    app.service(
        actix_web_static_files::ResourceFiles::new("/", bundle).resolve_not_found_to_root(),
    );
}
