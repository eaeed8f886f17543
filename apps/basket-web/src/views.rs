//! HTML pages.
//!
//! Templates live in `templates/` and are compiled into the binary. Names end
//! in `.html`, so minijinja escapes every interpolated value.

use basket_core::{BasketSummary, LineItem, Money, DEFAULT_TOP_N};
use minijinja::{context, Environment, Error};

use crate::flash::Notice;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    ("items_table.html", include_str!("../templates/items_table.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("summary.html", include_str!("../templates/summary.html")),
];

/// The page templates, parsed once at startup.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_filter("money", money);
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Views { env })
    }

    /// Main page: banner, add-item form, current items and total.
    pub fn render_index(
        &self,
        items: &[LineItem],
        total: Money,
        notice: Option<Notice>,
    ) -> Result<String, Error> {
        let flash = notice.map(|n| {
            context! {
                kind => n.kind().as_str(),
                message => n.message(),
            }
        });

        self.env.get_template("index.html")?.render(context! {
            items => items,
            total => total,
            flash => flash,
            invalid_field => notice.and_then(Notice::field),
        })
    }

    /// Statistics page: totals panel, item table, top ranking, PDF download.
    pub fn render_summary(&self, summary: &BasketSummary) -> Result<String, Error> {
        self.env.get_template("summary.html")?.render(context! {
            items => &summary.items,
            item_count => summary.item_count,
            total => summary.total,
            average => summary.average,
            top_expensive => &summary.top_expensive,
            top_n => DEFAULT_TOP_N,
        })
    }
}

/// `{{ cents|money }}` renders `$1,234.56`.
fn money(cents: i64) -> String {
    Money::from_cents(cents).to_string()
}
