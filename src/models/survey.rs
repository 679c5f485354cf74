use serde::{Deserialize, Serialize};

/// One market-research survey submission. Everything except the submitter
/// email is optional on the wire and defaults to empty; the email is the
/// only field the dispatcher validates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPayload {
    #[serde(default)]
    pub full_name: String,

    pub email: Option<String>,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub business_type: String,

    #[serde(default)]
    pub employee_count: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub current_method: String,

    #[serde(default)]
    pub challenges: Vec<String>,

    #[serde(default)]
    pub other_challenge: String,

    #[serde(default)]
    pub desired_features: Vec<String>,

    #[serde(default)]
    pub budget_range: String,

    #[serde(default)]
    pub launch_interest: String,

    #[serde(default)]
    pub comments: String,
}

/// Body of `POST /send-survey-notification`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyNotificationRequest {
    pub survey_data: Option<SurveyPayload>,
}
