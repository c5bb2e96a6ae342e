use url::form_urlencoded;

/// Realm used for every login. Only PAM accounts are supported.
pub const DEFAULT_REALM: &str = "pam";

/// Form body for `POST /access/ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketRequest {
    /// First login with a password.
    Login { username: String, password: String },
    /// Renewal: the current ticket is presented in place of the password.
    Renewal { username: String, ticket: String },
}

impl TicketRequest {
    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        TicketRequest::Login {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn renewal(username: impl Into<String>, ticket: impl Into<String>) -> Self {
        TicketRequest::Renewal {
            username: username.into(),
            ticket: ticket.into(),
        }
    }

    /// Encodes the request as `application/x-www-form-urlencoded`.
    pub fn to_form(&self) -> String {
        let mut form = form_urlencoded::Serializer::new(String::new());
        match self {
            TicketRequest::Login { username, password } => {
                form.append_pair("username", username)
                    .append_pair("password", password)
                    .append_pair("realm", DEFAULT_REALM)
                    .append_pair("new-format", "1");
            }
            TicketRequest::Renewal { username, ticket } => {
                form.append_pair("username", username)
                    .append_pair("password", ticket);
            }
        }
        form.finish()
    }
}
