//! `nodegrouplist.html`: table of node groups with totals.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Template, escape_html};
use crate::i18n::Translator;
use crate::models::{ListSummary, NodeGroupList, NodeGroupRow};

/// Typed payload for the node group list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NodeGroupListPage {
    pub title: String,
    #[schema(value_type = String)]
    pub template: &'static str,
    /// Groups ordered by priority, then name.
    pub nodegrouplist: Vec<NodeGroupRow>,
    pub listdata: ListSummary,
}

impl NodeGroupListPage {
    pub const TEMPLATE: &'static str = "nodegrouplist.html";

    pub fn new(list: NodeGroupList, t: &Translator) -> Self {
        Self {
            title: t.trans("Node Groups List").into_owned(),
            template: Self::TEMPLATE,
            nodegrouplist: list.groups,
            listdata: list.summary,
        }
    }
}

impl Template for NodeGroupListPage {
    fn name(&self) -> &'static str {
        self.template
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render_body(&self, t: &Translator) -> String {
        let mut html = String::new();

        html.push_str(r#"<table class="lmsbox">"#);
        html.push_str(&format!(
            "\n<thead><tr><th>{}</th><th>{}</th><th>{}</th><th>{}</th></tr></thead>\n<tbody>\n",
            escape_html(&t.trans("Name:")),
            escape_html(&t.trans("Description:")),
            escape_html(&t.trans("Priority:")),
            escape_html(&t.trans("Nodes:")),
        ));

        if self.nodegrouplist.is_empty() {
            html.push_str(&format!(
                "<tr><td colspan=\"4\" class=\"empty\">{}</td></tr>\n",
                escape_html(&t.trans("No such groups in database."))
            ));
        }

        for group in &self.nodegrouplist {
            html.push_str(&format!(
                "<tr data-id=\"{}\"><td>{}</td><td>{}</td><td class=\"number\">{}</td><td class=\"number\">{}</td></tr>\n",
                group.id,
                escape_html(&group.name),
                escape_html(&group.description),
                group.prio,
                group.nodescount,
            ));
        }

        html.push_str("</tbody>\n<tfoot><tr>");
        html.push_str(&format!(
            "<td colspan=\"3\"><b>{}</b></td><td class=\"number\"><b>{}</b></td>",
            escape_html(&t.trans_args("Total: $0", &[self.listdata.total.to_string().as_str()])),
            self.listdata.nodestotal,
        ));
        html.push_str("</tr></tfoot>\n</table>");

        html
    }
}
