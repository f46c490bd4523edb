// ── Domain-to-API type conversions ──
//
// Bridges the HTTP layer's domain types into the raw request shapes
// `clubwifi_api` sends over the wire.

use clubwifi_api::membership::models::NewMemberRow;
use clubwifi_api::router::models::{HotspotLoginParams, HotspotUserPatch, NewHotspotUser};

use crate::model::hotspot::{HotspotAccount, HotspotCredential};

impl From<&HotspotCredential> for HotspotLoginParams {
    fn from(cred: &HotspotCredential) -> Self {
        Self {
            user: cred.username.clone(),
            password: cred.password.clone(),
            mac_address: cred.mac_address.clone(),
            ip: cred.ip_address.clone(),
        }
    }
}

impl From<&HotspotAccount> for NewHotspotUser {
    fn from(account: &HotspotAccount) -> Self {
        Self {
            name: account.username.clone(),
            password: account.password.clone(),
            profile: account.profile.clone(),
            comment: linkage_comment(account),
        }
    }
}

impl From<&HotspotAccount> for HotspotUserPatch {
    fn from(account: &HotspotAccount) -> Self {
        Self {
            // An empty password on an edit means "leave it alone".
            password: (!account.password.is_empty()).then(|| account.password.clone()),
            profile: Some(account.profile.clone()),
            comment: linkage_comment(account),
        }
    }
}

impl From<&HotspotAccount> for NewMemberRow {
    fn from(account: &HotspotAccount) -> Self {
        Self {
            student_id: account.student_id.clone().unwrap_or_default(),
            full_name: match (account.surname.as_deref(), account.given_name.as_deref()) {
                (Some(ho), Some(ten)) => format!("{ho} {ten}"),
                (Some(name), None) | (None, Some(name)) => name.to_owned(),
                (None, None) => String::new(),
            },
            birth_date: account.birth_date.clone(),
            class_name: account.class_name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
        }
    }
}

/// RouterOS hotspot users have no member fields, so the linkage rides in
/// the comment (`"<MSSV> - <Ho> <Ten>"`), recoverable by eye in WinBox.
fn linkage_comment(account: &HotspotAccount) -> Option<String> {
    let student_id = account.student_id.as_deref()?;
    let full_name = match (account.surname.as_deref(), account.given_name.as_deref()) {
        (Some(ho), Some(ten)) => format!("{ho} {ten}"),
        (Some(name), None) | (None, Some(name)) => name.to_owned(),
        (None, None) => String::new(),
    };

    if full_name.is_empty() {
        Some(student_id.to_owned())
    } else {
        Some(format!("{student_id} - {full_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> HotspotAccount {
        HotspotAccount {
            username: "an.nv".into(),
            password: "s3cret".into(),
            profile: "default".into(),
            student_id: Some("123456".into()),
            surname: Some("Nguyen Van".into()),
            given_name: Some("An".into()),
            birth_date: None,
            class_name: Some("21CT111".into()),
            email: None,
            phone: None,
            account_id: None,
        }
    }

    #[test]
    fn login_params_keep_wire_spellings() {
        let cred = HotspotCredential {
            username: "u1".into(),
            password: "p1".into(),
            mac_address: "AA:BB:CC:DD:EE:FF".into(),
            ip_address: "10.0.0.5".into(),
        };

        let params = HotspotLoginParams::from(&cred);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["user"], "u1");
        assert_eq!(value["mac-address"], "AA:BB:CC:DD:EE:FF");
        assert_eq!(value["ip"], "10.0.0.5");
    }

    #[test]
    fn new_user_carries_linkage_comment() {
        let user = NewHotspotUser::from(&account());
        assert_eq!(user.comment.as_deref(), Some("123456 - Nguyen Van An"));
    }

    #[test]
    fn comment_absent_without_student_id() {
        let mut acc = account();
        acc.student_id = None;

        let user = NewHotspotUser::from(&acc);
        assert_eq!(user.comment, None);
    }

    #[test]
    fn patch_skips_empty_password() {
        let mut acc = account();
        acc.password = String::new();

        let patch = HotspotUserPatch::from(&acc);
        assert_eq!(patch.password, None);
        assert_eq!(patch.profile.as_deref(), Some("default"));
    }
}
