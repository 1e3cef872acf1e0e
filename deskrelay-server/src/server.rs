use std::path::Path;

use axum::{extract::RawForm, response::Html, routing::get, Router};
use deskrelay_core::{
    api::req::{TicketComment, TicketCreateRequest, TicketMetadata, TicketPayload},
    constants::TICKET_OUTPUT_FILE_NAME,
    http::ApiError,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    config::deskrelay_server_config,
    store::{helpdesk_client, templates, user_directory, TemplateMap, UserDirectory},
    views::view_engine,
};

const RFC_TICKET_SUBJECT: &'static str = "TEST AUTOMATION RFC";
const RFC_TICKET_BODY: &'static str =
    "Automated RFC raised from the deskrelay submission form.";
const RFC_APPROVER_ID: &'static str = "648535672";

pub fn routers() -> Router {
    Router::new().route("/", get(render_form).post(submit_form))
}

#[derive(Serialize)]
struct FormView {
    template_names: Vec<String>,
    users: Vec<DirectoryEntry>,
}

#[derive(Serialize)]
struct DirectoryEntry {
    name: String,
    id: u64,
}

fn form_view(templates: &TemplateMap, directory: &UserDirectory) -> FormView {
    FormView {
        template_names: templates.keys().cloned().collect(),
        users: directory
            .iter()
            .map(|(name, id)| DirectoryEntry {
                name: name.clone(),
                id: *id,
            })
            .collect(),
    }
}

/// the fixed payload relayed for every submission; parameterize here once
/// the form fields start feeding the ticket
fn rfc_ticket_request() -> TicketCreateRequest {
    TicketCreateRequest {
        ticket: TicketPayload {
            subject: RFC_TICKET_SUBJECT.to_string(),
            comment: TicketComment {
                body: RFC_TICKET_BODY.to_string(),
            },
            metadata: TicketMetadata {
                app: "deskrelay".to_string(),
                action: "approve".to_string(),
                approver_ids: vec![RFC_APPROVER_ID.to_string()],
            },
        },
    }
}

async fn render_form() -> Result<Html<String>, ApiError> {
    let view = form_view(templates(), user_directory());
    Ok(Html(view_engine().render("index.html", view)?))
}

async fn submit_form(RawForm(form): RawForm) -> Result<Html<String>, ApiError> {
    // submitted fields do not feed the ticket yet
    debug!("form submission: {}", String::from_utf8_lossy(&form));

    let resp = helpdesk_client()
        .create_ticket(&rfc_ticket_request())
        .await?;

    let config = deskrelay_server_config();
    write_ticket_dump(Path::new(&config.root_path), &resp).await?;
    info!("ticket created, raw response dumped");

    Ok(Html(view_engine().render("done.html", ())?))
}

/// overwrites the dump on every successful submission; skipped on failure
async fn write_ticket_dump(root: &Path, resp: &Value) -> anyhow::Result<()> {
    let path = root.join(TICKET_OUTPUT_FILE_NAME);
    tokio::fs::write(path, serde_json::to_string_pretty(resp)?).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use axum::{routing::post, Json};
    use deskrelay_core::{client::HelpdeskClient, obj::Credentials};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_form_view_lists_every_template_name() {
        let mut templates = TemplateMap::new();
        templates.insert("incident".to_string(), json!({ "priority": "high" }));
        templates.insert("request".to_string(), json!({}));
        templates.insert("question".to_string(), json!(null));

        let mut directory = UserDirectory::new();
        directory.insert("Road Runner".to_string(), 648535672);

        let view = form_view(&templates, &directory);

        assert_eq!(view.template_names.len(), 3);
        for name in &view.template_names {
            assert!(templates.contains_key(name));
        }
        assert_eq!(view.users.len(), 1);
        assert_eq!(view.users[0].id, 648535672);
    }

    #[test]
    fn test_rfc_ticket_request_is_fixed() {
        let body = serde_json::to_value(rfc_ticket_request()).unwrap();

        assert_eq!(body["ticket"]["subject"], "TEST AUTOMATION RFC");
        assert_eq!(body["ticket"]["metadata"]["approver_ids"][0], "648535672");
        assert_eq!(body["ticket"]["metadata"]["app"], "deskrelay");
    }

    #[tokio::test]
    async fn test_submission_relay_posts_fixed_payload_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));

        let calls_in = Arc::clone(&calls);
        let seen_in = Arc::clone(&seen);
        let app = Router::new().route(
            "/tickets.json",
            post(move |Json(body): Json<Value>| {
                let calls = Arc::clone(&calls_in);
                let seen = Arc::clone(&seen_in);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    *seen.lock().unwrap() = Some(body);
                    Json(json!({ "ticket": { "id": 1 } }))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let credentials = Credentials {
            api_user: "agent@example.com".to_string(),
            api_token: "secret".to_string(),
            sub_domain: "example".to_string(),
        };
        let client = HelpdeskClient::with_base_url(&credentials, base).unwrap();
        client.create_ticket(&rfc_ticket_request()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body["ticket"]["subject"], "TEST AUTOMATION RFC");
        assert_eq!(body["ticket"]["metadata"]["approver_ids"][0], "648535672");
    }

    #[tokio::test]
    async fn test_write_ticket_dump_round_trips() {
        let root = std::env::temp_dir().join("deskrelay-test-dump");
        std::fs::create_dir_all(&root).unwrap();

        let resp = json!({ "ticket": { "id": 35436, "subject": "TEST AUTOMATION RFC" } });
        write_ticket_dump(&root, &resp).await.unwrap();

        let raw = std::fs::read_to_string(root.join(TICKET_OUTPUT_FILE_NAME)).unwrap();
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, resp);

        std::fs::remove_dir_all(&root).unwrap();
    }
}
