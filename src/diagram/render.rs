use std::borrow::Cow;
use std::fmt::Write;

use crate::workflow::RoleGroupedView;

pub const DIAGRAM_HEADER: &str = "actdiag {\n";
pub const DIAGRAM_FOOTER: &str = "}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Backslash-escape `"` and `\` inside quoted values.
    ///
    /// Off by default: names are emitted verbatim, so a state name that
    /// contains a double quote produces a diagram the renderer rejects.
    pub escape_quotes: bool,
}

impl RenderOptions {
    pub fn with_escaped_quotes(mut self, escape_quotes: bool) -> Self {
        self.escape_quotes = escape_quotes;
        self
    }

    fn quote<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_quotes && value.contains(['"', '\\']) {
            Cow::Owned(value.replace('\\', "\\\\").replace('"', "\\\""))
        } else {
            Cow::Borrowed(value)
        }
    }
}

/// Serialize a grouped workflow into an actdiag document.
///
/// Every role with states becomes a `lane` block, then every transition of
/// every role is emitted as an edge after the lanes:
///
/// ```text
/// actdiag {
/// lane "Manager" {
///     "Draft"
///     "Approved"
/// }
///     "Draft" -> "Approved" [label = "approve"]
/// }
/// ```
pub fn render(view: &RoleGroupedView, options: RenderOptions) -> String {
    let mut out = String::from(DIAGRAM_HEADER);

    // Writing into a String cannot fail
    for (role, states) in view.states_by_role.iter() {
        let _ = writeln!(out, "lane \"{}\" {{", options.quote(role));
        for state in states {
            let _ = writeln!(out, "\t\"{}\"", options.quote(state));
        }
        out.push_str("}\n");
    }

    for (_, transitions) in view.transitions_by_role.iter() {
        for transition in transitions {
            let _ = writeln!(
                out,
                "\t\"{}\" -> \"{}\" [label = \"{}\"]",
                options.quote(&transition.from_state),
                options.quote(&transition.to_state),
                options.quote(&transition.action)
            );
        }
    }

    out.push_str(DIAGRAM_FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::WorkflowTransition;

    fn manager_view() -> RoleGroupedView {
        let mut view = RoleGroupedView::default();
        view.states_by_role.push("Manager", "Draft".to_string());
        view.states_by_role.push("Manager", "Approved".to_string());
        view.transitions_by_role
            .push("Manager", WorkflowTransition::new("Draft", "Approved", "approve", "Manager"));
        view
    }

    #[test]
    fn test_empty_view_is_header_then_footer() {
        let text = render(&RoleGroupedView::default(), RenderOptions::default());
        assert_eq!(text, "actdiag {\n}");
    }

    #[test]
    fn test_single_lane_scenario() {
        let text = render(&manager_view(), RenderOptions::default());
        assert_eq!(
            text,
            "actdiag {\n\
             lane \"Manager\" {\n\
             \t\"Draft\"\n\
             \t\"Approved\"\n\
             }\n\
             \t\"Draft\" -> \"Approved\" [label = \"approve\"]\n\
             }"
        );
    }

    #[test]
    fn test_lanes_follow_role_order_and_transitions_follow_lanes() {
        let mut view = RoleGroupedView::default();
        view.states_by_role.push("Employee", "Draft".to_string());
        view.states_by_role.push("Manager", "Approved".to_string());
        view.transitions_by_role
            .push("Employee", WorkflowTransition::new("Draft", "Pending", "Submit", "Employee"));
        view.transitions_by_role
            .push("Manager", WorkflowTransition::new("Pending", "Approved", "Approve", "Manager"));

        let text = render(&view, RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "lane \"Employee\" {");
        assert_eq!(lines[4], "lane \"Manager\" {");
        assert_eq!(lines[7], "\t\"Draft\" -> \"Pending\" [label = \"Submit\"]");
        assert_eq!(lines[8], "\t\"Pending\" -> \"Approved\" [label = \"Approve\"]");
        assert_eq!(lines.last(), Some(&"}"));
    }

    #[test]
    fn test_unassigned_lane_has_empty_name() {
        let mut view = RoleGroupedView::default();
        view.states_by_role.push("", "Cancelled".to_string());

        let text = render(&view, RenderOptions::default());
        assert!(text.contains("lane \"\" {\n\t\"Cancelled\"\n}\n"));
    }

    #[test]
    fn test_quotes_are_verbatim_by_default() {
        let mut view = RoleGroupedView::default();
        view.states_by_role.push("QA", "Say \"hi\"".to_string());

        let text = render(&view, RenderOptions::default());
        assert!(text.contains("\t\"Say \"hi\"\"\n"));
    }

    #[test]
    fn test_escape_quotes_option() {
        let mut view = RoleGroupedView::default();
        view.states_by_role.push("QA", "Say \"hi\"".to_string());
        view.transitions_by_role
            .push("QA", WorkflowTransition::new("a\\b", "c", "go", "QA"));

        let text = render(&view, RenderOptions::default().with_escaped_quotes(true));
        assert!(text.contains("\t\"Say \\\"hi\\\"\"\n"));
        assert!(text.contains("\t\"a\\\\b\" -> \"c\" [label = \"go\"]\n"));
    }

    #[test]
    fn test_transitions_without_states_still_render() {
        let mut view = RoleGroupedView::default();
        view.transitions_by_role
            .push("Bot", WorkflowTransition::new("A", "B", "auto", "Bot"));

        let text = render(&view, RenderOptions::default());
        assert_eq!(text, "actdiag {\n\t\"A\" -> \"B\" [label = \"auto\"]\n}");
    }
}
