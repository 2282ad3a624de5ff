use crate::Requester;

pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to access this endpoint.";

const TAG_REPORT_ROLES: [&str; 2] = ["Moderators", "Editors"];

/// Role gate in front of the tag usage report.
#[derive(Clone, Debug)]
pub struct PermissionGate {
	roles: &'static [&'static str],
}
impl PermissionGate {
	pub fn tag_report() -> Self {
		Self { roles: &TAG_REPORT_ROLES }
	}

	pub fn allow(&self, requester: &Requester) -> bool {
		// Anonymous identities never carry a role, whatever the role set says.
		if !requester.authenticated {
			return false;
		}
		if requester.elevated {
			return true;
		}

		requester.has_any_role(self.roles.iter().copied())
	}

	pub fn message(&self) -> &'static str {
		PERMISSION_DENIED_MESSAGE
	}
}
impl Default for PermissionGate {
	fn default() -> Self {
		Self::tag_report()
	}
}
