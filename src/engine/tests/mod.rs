use super::*;
use crate::schema::PolicyValueKind;
use insta::assert_snapshot;
use serde_json::json;
use yare::parameterized;

const STRING_VALUED_PATH: &str = "windowsupdate::autoupdatecfg::allowmuupdateservice";
const MAPPING_VALUED_PATH: &str = "advancedfirewall::wf_firewallrules::firewallrules";

fn declare(title: &str) -> Declaration {
    Declaration::new(title)
}

fn assert_invalid_path(result: Result<Resource, GpoError>, raw: &str) {
    let err = result.unwrap_err();
    assert!(matches!(err, GpoError::NotAValidPath(_)));
    assert_eq!(err.to_string(), format!("Not a valid path: '{raw}'"));
}

include!("core.rs");
include!("scopes.rs");
include!("values.rs");
