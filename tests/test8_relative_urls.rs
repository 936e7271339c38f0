use actix_web::web::{self, Data};
use actix_web::{App, test};
use scraper::{Html, Selector};

use rusty_golf_draft::controller::http_handlers::configure;

mod common;

#[actix_web::test]
async fn test_hx_routes_are_relative() -> Result<(), Box<dyn std::error::Error>> {
    let board = common::static_board();
    let app = test::init_service(
        App::new()
            .app_data(Data::from(board))
            .service(web::scope("/golf").configure(configure)),
    )
    .await;

    let req = test::TestRequest::get().uri("/golf/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(
        resp.status().is_success(),
        "Unexpected status from /golf/: {}",
        resp.status()
    );
    let body = test::read_body(resp).await;
    let body_str = String::from_utf8(body.to_vec())?;
    let document = Html::parse_document(&body_str);

    let mut hx_gets = Vec::new();
    for attr in ["hx-get", "hx-post"] {
        let selector = Selector::parse(&format!("[{attr}]")).map_err(|e| e.to_string())?;
        for element in document.select(&selector) {
            if let Some(value) = element.value().attr(attr) {
                assert!(
                    !value.starts_with('/'),
                    "{attr} attribute should be relative but found '{value}'"
                );
                if attr == "hx-get" {
                    hx_gets.push(value.to_string());
                }
            }
        }
    }

    assert!(
        !hx_gets.is_empty(),
        "Expected at least one hx-get attribute in index markup"
    );

    for hx in hx_gets {
        let follow_req = test::TestRequest::get()
            .uri(&format!("/golf/{hx}"))
            .to_request();
        let follow_resp = test::call_service(&app, follow_req).await;
        assert!(
            follow_resp.status().is_success(),
            "Follow-up hx-get '{hx}' returned status {}",
            follow_resp.status()
        );
    }

    Ok(())
}
