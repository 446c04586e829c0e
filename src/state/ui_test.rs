use super::*;

fn typed_user_form() -> UiState {
    let mut ui = UiState::default();
    ui.open_modal(ActiveModal::AddUser);
    ui.user_form.name = "Ada".to_owned();
    ui.user_form.email = "ada@example.com".to_owned();
    ui
}

#[test]
fn defaults_open_on_the_users_tab_with_nothing_pending() {
    let ui = UiState::default();
    assert_eq!(ui.active_tab, ActiveTab::Users);
    assert!(ui.modal.is_none());
    assert!(ui.notice.is_none());
    assert_eq!(ui.user_form, UserForm::default());
    assert_eq!(ui.post_form, PostForm::default());
    assert_eq!(ui.connection_status, ConnectionStatus::Disconnected);
}

#[test]
fn user_saved_resets_the_form_and_closes_the_modal() {
    let mut ui = typed_user_form();
    ui.user_saved();

    assert_eq!(ui.user_form.name, "");
    assert_eq!(ui.user_form.email, "");
    assert!(ui.modal.is_none());
    let notice = ui.notice.expect("notice");
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.text, "User added");
}

#[test]
fn user_save_failure_keeps_the_typed_form_and_the_open_modal() {
    let mut ui = typed_user_form();
    ui.user_save_failed();

    assert_eq!(ui.user_form.name, "Ada");
    assert_eq!(ui.user_form.email, "ada@example.com");
    assert_eq!(ui.modal, Some(ActiveModal::AddUser));
    let notice = ui.notice.expect("notice");
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.text, "Failed to add user");
}

#[test]
fn post_saved_resets_the_form_and_closes_the_modal() {
    let mut ui = UiState::default();
    ui.open_modal(ActiveModal::AddPost);
    ui.post_form.user_id = "u-1".to_owned();
    ui.post_form.title = "Hello".to_owned();
    ui.post_form.content = "World".to_owned();

    ui.post_saved();

    assert_eq!(ui.post_form, PostForm::default());
    assert!(ui.modal.is_none());
}

#[test]
fn post_save_failure_keeps_the_modal_open() {
    let mut ui = UiState::default();
    ui.open_modal(ActiveModal::AddPost);
    ui.post_form.title = "Hello".to_owned();

    ui.post_save_failed();

    assert_eq!(ui.modal, Some(ActiveModal::AddPost));
    assert_eq!(ui.post_form.title, "Hello");
    assert_eq!(ui.notice.expect("notice").text, "Failed to add post");
}

#[test]
fn delete_outcomes_raise_notices_without_touching_forms() {
    let mut ui = typed_user_form();

    ui.user_deleted();
    assert_eq!(ui.notice.as_ref().expect("notice").text, "User deleted");
    assert_eq!(ui.user_form.name, "Ada");

    ui.post_delete_failed();
    let notice = ui.notice.expect("notice");
    assert_eq!(notice.text, "Failed to delete post");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn closing_the_modal_discards_both_forms() {
    let mut ui = typed_user_form();
    ui.post_form.title = "draft".to_owned();

    ui.close_modal();

    assert!(ui.modal.is_none());
    assert_eq!(ui.user_form, UserForm::default());
    assert_eq!(ui.post_form, PostForm::default());
}

#[test]
fn stale_timers_cannot_dismiss_a_newer_notice() {
    let mut ui = UiState::default();
    ui.user_saved();
    let first_seq = ui.notice.as_ref().expect("notice").seq;

    ui.post_saved();
    ui.dismiss_notice_if_seq(first_seq);
    assert!(ui.notice.is_some(), "newer notice must survive the stale timer");

    let current_seq = ui.notice.as_ref().expect("notice").seq;
    ui.dismiss_notice_if_seq(current_seq);
    assert!(ui.notice.is_none());
}

#[test]
fn forms_require_every_field_non_empty() {
    let mut form = UserForm::default();
    assert!(!form.is_complete());
    form.name = "Ada".to_owned();
    form.email = "   ".to_owned();
    assert!(!form.is_complete());
    form.email = "ada@example.com".to_owned();
    assert!(form.is_complete());

    let mut post = PostForm::default();
    post.title = "Hello".to_owned();
    post.content = "World".to_owned();
    assert!(!post.is_complete(), "an author must be selected");
    post.user_id = "u-1".to_owned();
    assert!(post.is_complete());
}
