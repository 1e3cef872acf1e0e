use serde::{Deserialize, Serialize};

/// outbound create-ticket body, nested the way the vendor expects
#[derive(Serialize, Deserialize, Debug)]
pub struct TicketCreateRequest {
    pub ticket: TicketPayload,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TicketPayload {
    /// ticket subject line
    pub subject: String,
    /// first public comment on the ticket
    pub comment: TicketComment,
    /// application metadata block carried on the ticket
    pub metadata: TicketMetadata,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TicketComment {
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TicketMetadata {
    /// application identifier
    pub app: String,
    /// action requested of the approvers
    pub action: String,
    /// vendor user ids allowed to approve the request
    pub approver_ids: Vec<String>,
}
