use std::collections::BTreeSet;

/// Identity facts resolved upstream. Nothing here authenticates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Requester {
	pub authenticated: bool,
	/// Staff or superuser.
	pub elevated: bool,
	pub roles: BTreeSet<String>,
}
impl Requester {
	pub fn anonymous() -> Self {
		Self::default()
	}

	pub fn authenticated() -> Self {
		Self { authenticated: true, ..Self::default() }
	}

	pub fn elevated() -> Self {
		Self { authenticated: true, elevated: true, roles: BTreeSet::new() }
	}

	pub fn with_role(mut self, role: impl Into<String>) -> Self {
		self.roles.insert(role.into());

		self
	}

	pub fn has_any_role<'a, I>(&self, roles: I) -> bool
	where
		I: IntoIterator<Item = &'a str>,
	{
		roles.into_iter().any(|role| self.roles.contains(role))
	}
}
