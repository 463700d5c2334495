//! Plain-text rendering of the panel view.

use std::fmt::Write as _;

use playbooks_app::view::{Icon, PanelView, Widget};
use playbooks_app::widgets::ToggleProps;
use playbooks_domain::playbook::Playbook;
use playbooks_domain::user::User;

fn checkbox(toggle: &ToggleProps) -> String {
    let mark = if toggle.checked { 'x' } else { ' ' };
    let lock = if toggle.disabled { " (locked)" } else { "" };
    format!("[{mark}] {}{lock}", toggle.label)
}

fn icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Play => ">",
        Icon::AccountCheck => "+",
    }
}

/// Render the whole panel, headed by the playbook title.
#[must_use]
pub fn panel(playbook: &Playbook, view: &PanelView) -> String {
    let mut out = String::new();
    let archived = if view.archived { "  [archived]" } else { "" };
    let _ = writeln!(out, "{} ({}){archived}", playbook.title, playbook.id);

    for section in &view.sections {
        let _ = writeln!(out, "{} {}", icon(section.icon), section.title);
        for setting in &section.settings {
            widget(&mut out, &setting.widget);
        }
    }
    out
}

fn widget(out: &mut String, widget: &Widget) {
    match widget {
        Widget::CreateChannel(props) => {
            let (public, private) = if props.public { ('*', ' ') } else { (' ', '*') };
            let lock = if props.disabled { " (locked)" } else { "" };
            let _ = writeln!(
                out,
                "    {}{lock}: ({public}) {}  ({private}) {}",
                props.title, props.public_label, props.private_label
            );
            let name = if props.name_template.is_empty() {
                &props.name_placeholder
            } else {
                &props.name_template
            };
            let _ = writeln!(out, "        name: {name}");
        }
        Widget::InviteUsers(props) => {
            let _ = writeln!(out, "    {}", checkbox(&props.toggle));
            if !props.user_ids.is_empty() {
                let ids: Vec<&str> = props.user_ids.iter().map(|id| id.as_str()).collect();
                let _ = writeln!(out, "        {}", ids.join(", "));
            }
        }
        Widget::AssignOwner(props) => {
            let owner = props.owner_id.as_ref().map_or("-", |id| id.as_str());
            let _ = writeln!(out, "    {}: {owner}", checkbox(&props.toggle));
        }
        Widget::Webhook(props) => {
            let _ = writeln!(out, "    {}", checkbox(&props.toggle));
            if props.input.is_empty() {
                let _ = writeln!(out, "        {}", props.placeholder);
            }
            for line in props.input.split('\n').filter(|l| !l.is_empty()) {
                let _ = writeln!(out, "        {line}");
            }
        }
        Widget::WelcomeMessage { toggle, editor } => {
            let _ = writeln!(out, "    {}", checkbox(toggle));
            let text = if editor.value.is_empty() {
                &editor.placeholder
            } else {
                &editor.value
            };
            for line in text.lines() {
                let _ = writeln!(out, "        | {line}");
            }
        }
        Widget::Categorize(props) => {
            let name = if props.category_name.is_empty() {
                &props.placeholder
            } else {
                &props.category_name
            };
            let _ = writeln!(out, "    {}: {name}", checkbox(&props.toggle));
        }
    }
}

/// One line per user: id, username and display name.
#[must_use]
pub fn users(users: &[User]) -> String {
    if users.is_empty() {
        return "(no users)\n".to_string();
    }
    users.iter().fold(String::new(), |mut out, user| {
        let _ = writeln!(out, "{}  @{}  {}", user.id, user.username, user.display_name());
        out
    })
}
