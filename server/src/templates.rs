use actix_web::{http::header::ContentType, HttpResponse};
use serde::Serialize;
use tera::{Context, Tera};

use errors::Error;

/// Page templates, compiled into the binary so the server does not depend on
/// its working directory.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("polls/index.html", include_str!("../templates/polls/index.html")),
            ("polls/detail.html", include_str!("../templates/polls/detail.html")),
            ("polls/results.html", include_str!("../templates/polls/results.html")),
        ])?;

        Ok(Templates { tera })
    }

    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String, Error> {
        let context = Context::from_serialize(context)?;
        let body = self.tera.render(name, &context)?;

        Ok(body)
    }

    /// Renders `name` into a 200 HTML response.
    pub fn respond<C: Serialize>(&self, name: &str, context: &C) -> Result<HttpResponse, Error> {
        let body = self.render(name, context)?;

        Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body))
    }
}
