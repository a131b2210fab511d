use serde::{Deserialize, Deserializer, Serialize};

/// Resource type tag the service expects on every account.
pub const ACCOUNT_TYPE: &str = "accounts";

/// `{"data": ...}` wrapper shared by every request and response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub organisation_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: i64,
    /// Server timestamp, passed through untouched.
    pub created_on: String,
    pub modified_on: String,
    pub attributes: Attributes,
}

impl Account {
    /// New account of type `accounts`, version 0 and no timestamps.
    pub fn new(
        id: impl Into<String>,
        organisation_id: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            id: id.into(),
            organisation_id: organisation_id.into(),
            kind: ACCOUNT_TYPE.to_string(),
            attributes,
            ..Self::default()
        }
    }
}

/// Account attributes. Empty strings, empty lists and `false` flags are left
/// out of the serialized object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_currency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bic: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iban: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub customer_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[serde(rename = "alternative_name", skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_classification: String,
    #[serde(skip_serializing_if = "is_false")]
    pub join_account: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub account_matching_opt_out: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secondary_identification: String,
    #[serde(skip_serializing_if = "is_false")]
    pub switched: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Pagination for [`Client::list`](crate::Client::list). Unset fields leave
/// the choice to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Params {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Query pairs in wire order; absent fields produce nothing.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, u32)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(page) = self.page {
            pairs.push(("page[number]", page));
        }
        if let Some(size) = self.page_size {
            pairs.push(("page[size]", size));
        }
        pairs
    }
}

/// Body of a `GET /v1/organisation/accounts` response.
#[derive(Debug, Deserialize)]
pub(crate) struct AccountList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Account>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Account>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Account>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// Error body returned by the service alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error_message: String,
}

#[cfg(test)]
pub(crate) fn sample_accounts() -> Vec<Account> {
    let attributes = |country: &str, currency: &str, bank_id_code: &str| Attributes {
        country: country.into(),
        base_currency: currency.into(),
        bank_id: "400300".into(),
        bank_id_code: bank_id_code.into(),
        bic: "NWBKGB22".into(),
        ..Attributes::default()
    };
    vec![
        Account::new(
            "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
            "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
            attributes("GB", "GBP", "GBDSC"),
        ),
        Account::new(
            "da171a64-f1db-40ff-a29f-f852ce95d7b1",
            "6224e61c-f135-4708-9b4d-3afefa6f9c76",
            attributes("GR", "EUR", "GRBIC"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_create_envelope_exactly() {
        let account = &sample_accounts()[0];
        let body = serde_json::to_string(&Envelope { data: account }).unwrap();
        assert_eq!(
            body,
            r#"{"data":{"id":"ad27e265-9605-4b4b-a0e5-3003ea9cc4dc","organisation_id":"eb0bd6f5-c3f5-44b2-b677-acd23cdde73c","type":"accounts","version":0,"created_on":"","modified_on":"","attributes":{"country":"GB","base_currency":"GBP","bank_id":"400300","bank_id_code":"GBDSC","bic":"NWBKGB22"}}}"#
        );
    }

    #[test]
    fn omits_zero_valued_attributes() {
        let value = serde_json::to_value(&sample_accounts()[1].attributes).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["bank_id", "bank_id_code", "base_currency", "bic", "country"]
        );

        let empty = serde_json::to_value(Attributes::default()).unwrap();
        assert_eq!(empty, json!({}));
    }

    #[test]
    fn keeps_set_flags_and_lists() {
        let attributes = Attributes {
            name: vec!["Samantha Holder".into()],
            alternative_names: vec!["Sam Holder".into()],
            join_account: true,
            switched: true,
            ..Attributes::default()
        };
        let value = serde_json::to_value(&attributes).unwrap();
        assert_eq!(
            value,
            json!({
                "name": ["Samantha Holder"],
                "alternative_name": ["Sam Holder"],
                "join_account": true,
                "switched": true
            })
        );
    }

    #[test]
    fn decodes_server_account_with_extra_fields() {
        let payload = json!({
            "data": {
                "id": "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
                "organisation_id": "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
                "type": "accounts",
                "version": 3,
                "created_on": "2021-03-01T10:00:00.000Z",
                "modified_on": "2021-03-02T10:00:00.000Z",
                "attributes": {
                    "country": "GB",
                    "account_matching_opt_out": true,
                    "status": "confirmed"
                }
            },
            "links": { "self": "/v1/organisation/accounts/ad27e265-9605-4b4b-a0e5-3003ea9cc4dc" }
        });
        let envelope: Envelope<Account> = serde_json::from_value(payload).unwrap();
        let account = envelope.data;
        assert_eq!(account.version, 3);
        assert_eq!(account.created_on, "2021-03-01T10:00:00.000Z");
        assert!(account.attributes.account_matching_opt_out);
        assert_eq!(account.attributes.status, "confirmed");
        assert!(account.attributes.bic.is_empty());
    }

    #[test]
    fn null_list_decodes_as_empty() {
        let list: AccountList = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(list.data.is_empty());
        let list: AccountList = serde_json::from_str(r#"{"links":{}}"#).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn params_only_emit_set_fields() {
        assert!(Params::new().query_pairs().is_empty());
        assert_eq!(Params::new().page_size(5).query_pairs(), [("page[size]", 5)]);
        assert_eq!(
            Params::new().page(1).page_size(10).query_pairs(),
            [("page[number]", 1), ("page[size]", 10)]
        );
    }
}
