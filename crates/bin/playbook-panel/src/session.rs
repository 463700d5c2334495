//! Executes parsed commands against the panel and the playbook service.

use std::time::Instant;

use playbooks_app::dispatch::IntentSink;
use playbooks_app::panel::AutomationPanel;
use playbooks_app::ports::{Localizer, PlaybookRepository, SnapshotPublisher, UserDirectory};
use playbooks_app::services::playbook_service::PlaybookService;
use playbooks_app::view::{OUTGOING_WEBHOOK, Widget};
use playbooks_domain::error::PlaybookError;
use playbooks_domain::time;

use crate::command::{Command, HELP, Setting};
use crate::render;

fn outcome(dispatched: bool) -> String {
    if dispatched {
        "sent\n".to_string()
    } else {
        "no change\n".to_string()
    }
}

/// Run one command and return the text to print.
///
/// Intents are only handed to the dispatcher here; their effect shows up
/// when the next snapshot arrives.
///
/// # Errors
///
/// Propagates user directory and service failures.
pub async fn execute<S, U, L, R, P>(
    panel: &mut AutomationPanel<S, U, L>,
    service: &PlaybookService<R, P>,
    command: Command,
    now: Instant,
) -> Result<String, PlaybookError>
where
    S: IntentSink,
    U: UserDirectory,
    L: Localizer,
    R: PlaybookRepository,
    P: SnapshotPublisher,
{
    let output = match command {
        Command::Show => render::panel(panel.snapshot(), &panel.view()),
        Command::Help => format!("{HELP}\n"),
        Command::Quit => String::new(),
        Command::Toggle(setting) => outcome(match setting {
            Setting::InviteUsers => panel.toggle_invite_users(),
            Setting::DefaultOwner => panel.toggle_default_owner(),
            Setting::Webhook => panel.toggle_webhook_on_creation(),
            Setting::WelcomeMessage => panel.toggle_message_on_join(),
            Setting::Categorize => panel.toggle_categorize_channel(),
        }),
        Command::Invite(user) => outcome(panel.add_invited_user(&user)),
        Command::Uninvite(user) => outcome(panel.remove_invited_user(&user)),
        Command::Owner(owner) => outcome(panel.assign_default_owner(owner)),
        Command::Webhooks(raw) => {
            let view = panel.view();
            let rejected = match view.setting(OUTGOING_WEBHOOK).map(|s| &s.widget) {
                Some(Widget::Webhook(props)) => props.validate(&raw).err(),
                _ => None,
            };
            match rejected {
                Some(err) => {
                    tracing::debug!(cause = %err.cause, "webhook text rejected");
                    format!("{err}\n")
                }
                None => outcome(panel.commit_webhook_text(&raw)),
            }
        }
        Command::Welcome(text) => outcome(panel.save_message_on_join(&text)),
        Command::Category(name) => outcome(panel.change_category_name(&name)),
        Command::PublicChannel(public) => {
            if panel.set_public_channel(public, now) {
                render::panel(panel.snapshot(), &panel.view())
            } else {
                outcome(false)
            }
        }
        Command::ChannelName(template) => {
            if panel.set_channel_name_template(template, now) {
                render::panel(panel.snapshot(), &panel.view())
            } else {
                outcome(false)
            }
        }
        Command::Search(term) => render::users(&panel.search_users(&term).await?),
        Command::Users => render::users(&panel.list_users().await?),
        Command::Invited => render::users(&panel.invited_users().await?),
        Command::Flush => outcome(panel.flush()),
        Command::Archive => {
            service
                .archive_playbook(&panel.snapshot().id, time::now())
                .await?;
            "archived\n".to_string()
        }
        Command::Restore => {
            service.restore_playbook(&panel.snapshot().id).await?;
            "restored\n".to_string()
        }
    };
    Ok(output)
}
