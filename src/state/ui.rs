#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Collection tabs in the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Users,
    Posts,
}

/// Which add-entity modal is open, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    AddUser,
    AddPost,
}

/// Socket link health, shown in the top bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    #[default]
    Disconnected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient dismissible notification. `seq` lets the auto-dismiss timer
/// tell whether the notice it scheduled against is still the one showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
    pub seq: u64,
}

/// Add-user form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

impl UserForm {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Add-post form fields. `user_id` is the selected author.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub user_id: String,
    pub title: String,
    pub content: String,
}

impl PostForm {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.user_id.is_empty()
            && !self.title.trim().is_empty()
            && !self.content.trim().is_empty()
    }
}

/// UI state for the dashboard: active tab, open modal, form fields, the
/// current notice, and socket health.
///
/// The mutation-outcome transitions live here as pure functions so the
/// success/failure contracts are testable without a network: success resets
/// the relevant form, closes the modal, and raises a success notice;
/// failure leaves the form and modal untouched and raises an error notice
/// naming the action generically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub active_tab: ActiveTab,
    pub modal: Option<ActiveModal>,
    pub user_form: UserForm,
    pub post_form: PostForm,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
    pub connection_status: ConnectionStatus,
}

impl UiState {
    pub fn open_modal(&mut self, modal: ActiveModal) {
        self.modal = Some(modal);
    }

    /// Close the modal, discarding whatever was typed.
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.user_form = UserForm::default();
        self.post_form = PostForm::default();
    }

    pub fn user_saved(&mut self) {
        self.user_form = UserForm::default();
        self.modal = None;
        self.push_notice(Severity::Success, "User added");
    }

    /// The form and the open modal stay as they are so the user can correct
    /// and retry in context.
    pub fn user_save_failed(&mut self) {
        self.push_notice(Severity::Error, "Failed to add user");
    }

    pub fn post_saved(&mut self) {
        self.post_form = PostForm::default();
        self.modal = None;
        self.push_notice(Severity::Success, "Post added");
    }

    pub fn post_save_failed(&mut self) {
        self.push_notice(Severity::Error, "Failed to add post");
    }

    pub fn user_deleted(&mut self) {
        self.push_notice(Severity::Success, "User deleted");
    }

    pub fn user_delete_failed(&mut self) {
        self.push_notice(Severity::Error, "Failed to delete user");
    }

    pub fn post_deleted(&mut self) {
        self.push_notice(Severity::Success, "Post deleted");
    }

    pub fn post_delete_failed(&mut self) {
        self.push_notice(Severity::Error, "Failed to delete post");
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Dismiss only if the showing notice is still the one the caller
    /// scheduled against. Keeps a stale timer from eating a newer notice.
    pub fn dismiss_notice_if_seq(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    fn push_notice(&mut self, severity: Severity, text: &str) {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            text: text.to_owned(),
            severity,
            seq: self.notice_seq,
        });
    }
}
