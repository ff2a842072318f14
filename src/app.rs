use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use crate::assessment::{AssessmentRun, ScoreReport, percent_of};
use crate::data::Catalog;
use crate::error::{AuthError, ProgressError, RegistrationError};
use crate::form::{FormInput, FormState};
use crate::jobs::{ApplicationForm, JobBoard, JobFilter, JobPostingForm};
use crate::models::{Application, Job, Module, Profile, Role, User};
use crate::profile::ProfileForm;
use crate::progress::ModuleTrack;
use crate::registration::{Field, RegistrationWizard};
use crate::router::{self, View};
use crate::session::{self, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: LoginField::Email,
            error: None,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationScreen {
    pub wizard: RegistrationWizard,
    /// Index into the fields of the current step.
    pub focus: usize,
}

impl RegistrationScreen {
    pub fn focused_field(&self) -> Option<Field> {
        let step = self.wizard.step();
        self.wizard.form().fields(step).get(self.focus).copied()
    }
}

#[derive(Debug, Clone)]
pub struct AssessmentScreen {
    pub module_id: u32,
    pub run: AssessmentRun,
    /// Highlighted option, not necessarily the recorded answer.
    pub cursor: usize,
}

#[derive(Debug, Clone)]
pub struct ResultScreen {
    pub title: String,
    pub report: ScoreReport,
    pub unlocked: Vec<String>,
    pub scroll: usize,
}

#[derive(Debug, Clone)]
pub struct ApplicationScreen {
    pub job_id: u32,
    pub state: FormState<ApplicationForm>,
}

/// What the portal is currently showing.
#[derive(Debug, Clone)]
pub enum Screen {
    Welcome,
    Login(LoginForm),
    Registration(RegistrationScreen),
    RoleSelection { cursor: usize },
    Dashboard(View),
    Assessment(AssessmentScreen),
    Result(ResultScreen),
    /// The job list. While `searching`, typed keys edit the query.
    Jobs { searching: bool },
    JobPosting(FormState<JobPostingForm>),
    JobApplication(ApplicationScreen),
    Profile(FormState<ProfileForm>),
}

pub struct App {
    pub screen: Screen,
    catalog: Catalog,
    track: ModuleTrack,
    board: JobBoard,
    session: Session,
    /// Saved profiles by account email. Kept for this run only.
    profiles: HashMap<String, Profile>,
    dashboard: View,
    module_cursor: usize,
    posting_cursor: usize,
    job_filter: JobFilter,
    job_cursor: usize,
    notice: Option<String>,
}

impl App {
    /// Starts on the signed-in user's dashboard, or the welcome screen.
    pub fn new(catalog: Catalog, session: Session) -> Self {
        let track = ModuleTrack::new(catalog.modules.clone());
        let board = JobBoard::new(catalog.jobs.clone(), catalog.applications.clone());
        let dashboard = View::Dashboard(session.user().map_or(Role::JobSeeker, |u| u.role));
        let screen = match session.user() {
            Some(_) => Screen::Dashboard(dashboard.clone()),
            None => Screen::Welcome,
        };

        Self {
            screen,
            catalog,
            track,
            board,
            session,
            profiles: HashMap::new(),
            dashboard,
            module_cursor: 0,
            posting_cursor: 0,
            job_filter: JobFilter::default(),
            job_cursor: 0,
            notice: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn track(&self) -> &ModuleTrack {
        &self.track
    }

    pub fn board(&self) -> &JobBoard {
        &self.board
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.user().and_then(|user| self.profiles.get(&user.email))
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn module_cursor(&self) -> usize {
        self.module_cursor
    }

    pub fn selected_module(&self) -> Option<&Module> {
        self.track.modules().get(self.module_cursor)
    }

    fn show(&mut self, screen: Screen) {
        self.notice = None;
        self.screen = screen;
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn go_welcome(&mut self) {
        self.show(Screen::Welcome);
    }

    pub fn open_login(&mut self) {
        self.show(Screen::Login(LoginForm::new()));
    }

    pub fn open_registration(&mut self) {
        self.show(Screen::Registration(RegistrationScreen {
            wizard: RegistrationWizard::new(),
            focus: 0,
        }));
    }

    pub fn open_role_selection(&mut self) {
        self.show(Screen::RoleSelection { cursor: 0 });
    }

    /// Routes a role token to its dashboard, or to the invalid-role view.
    pub fn open_dashboard(&mut self, token: &str) {
        let view = router::route(token);
        if let View::InvalidRole(token) = &view {
            warn!(token = %token, "unknown role requested");
        }
        self.dashboard = view.clone();
        self.show(Screen::Dashboard(view));
    }

    /// Goes back to the dashboard last opened.
    pub fn return_to_dashboard(&mut self) {
        self.show(Screen::Dashboard(self.dashboard.clone()));
    }

    fn open_role_dashboard(&mut self, role: Role) {
        self.open_dashboard(role.token());
    }

    // Login

    pub fn login_input(&mut self, c: char) {
        if let Screen::Login(form) = &mut self.screen {
            form.focused_mut().push(c);
            form.error = None;
        }
    }

    pub fn login_backspace(&mut self) {
        if let Screen::Login(form) = &mut self.screen {
            form.focused_mut().pop();
        }
    }

    pub fn login_switch_field(&mut self) {
        if let Screen::Login(form) = &mut self.screen {
            form.focus = match form.focus {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
        }
    }

    /// Returns whether the user is now signed in.
    pub fn submit_login(&mut self) -> bool {
        let Screen::Login(form) = &mut self.screen else {
            return false;
        };

        let user = match session::authenticate(&self.catalog.accounts, &form.email, &form.password)
        {
            Ok(user) => user,
            Err(AuthError::InvalidCredentials) => {
                form.error = Some(
                    "Invalid email or password. Try jobseeker@demo.com / password123".to_string(),
                );
                return false;
            }
            Err(err) => {
                form.error = Some(err.to_string());
                return false;
            }
        };

        self.sign_in(user)
    }

    fn sign_in(&mut self, user: User) -> bool {
        let role = user.role;
        let name = user.name.clone();
        if let Err(err) = self.session.sign_in(user) {
            error!(error = %err, "failed to persist session");
            self.notice = Some(format!("Could not sign in: {}", err));
            return false;
        }
        self.open_role_dashboard(role);
        self.notice = Some(format!("Welcome back, {}!", name));
        true
    }

    pub fn sign_out(&mut self) {
        match self.session.sign_out() {
            Ok(_) => self.go_welcome(),
            Err(err) => {
                error!(error = %err, "failed to clear session");
                self.notice = Some(format!("Could not sign out: {}", err));
            }
        }
    }

    // Registration

    pub fn registration_input(&mut self, c: char) {
        if let Screen::Registration(screen) = &mut self.screen {
            if let Some(field) = screen.focused_field() {
                if let Some(text) = screen.wizard.form_mut().text_mut(field) {
                    text.push(c);
                }
            }
        }
    }

    pub fn registration_backspace(&mut self) {
        if let Screen::Registration(screen) = &mut self.screen {
            if let Some(field) = screen.focused_field() {
                if let Some(text) = screen.wizard.form_mut().text_mut(field) {
                    text.pop();
                }
            }
        }
    }

    pub fn registration_cycle(&mut self, forward: bool) {
        if let Screen::Registration(screen) = &mut self.screen {
            if let Some(field) = screen.focused_field() {
                screen.wizard.form_mut().cycle(field, forward);
            }
        }
    }

    pub fn registration_focus_next(&mut self) {
        if let Screen::Registration(screen) = &mut self.screen {
            let count = screen.wizard.form().fields(screen.wizard.step()).len();
            if count > 0 {
                screen.focus = (screen.focus + 1) % count;
            }
        }
    }

    pub fn registration_focus_previous(&mut self) {
        if let Screen::Registration(screen) = &mut self.screen {
            let count = screen.wizard.form().fields(screen.wizard.step()).len();
            if count > 0 {
                screen.focus = (screen.focus + count - 1) % count;
            }
        }
    }

    /// Advances the wizard, completing registration from the final step.
    pub fn registration_next(&mut self) {
        let Screen::Registration(screen) = &mut self.screen else {
            return;
        };

        if !screen.wizard.is_final_step() {
            if screen.wizard.next().is_ok() {
                screen.focus = 0;
            }
            return;
        }

        match screen.wizard.submit() {
            Ok(registration) => {
                let profile = Profile {
                    phone: registration.phone,
                    location: registration.location,
                    ..Profile::default()
                };
                self.profiles.insert(registration.user.email.clone(), profile);
                self.sign_in(registration.user);
            }
            Err(RegistrationError::Invalid(_)) => screen.focus = 0,
            Err(RegistrationError::NotFinalStep) => {}
        }
    }

    /// Steps back in the wizard, leaving it from the first step.
    pub fn registration_previous(&mut self) {
        let Screen::Registration(screen) = &mut self.screen else {
            return;
        };
        if screen.wizard.previous() {
            screen.focus = 0;
        } else {
            self.go_welcome();
        }
    }

    // Role selection

    pub fn role_selection_move(&mut self, forward: bool) {
        if let Screen::RoleSelection { cursor } = &mut self.screen {
            let len = Role::SELF_SERVICE.len();
            *cursor = if forward {
                (*cursor + 1) % len
            } else {
                (*cursor + len - 1) % len
            };
        }
    }

    pub fn confirm_role(&mut self) {
        if let Screen::RoleSelection { cursor } = self.screen {
            self.open_role_dashboard(Role::SELF_SERVICE[cursor]);
        }
    }

    // Job seeker dashboard

    pub fn select_next_module(&mut self) {
        let len = self.track.modules().len();
        if len > 0 {
            self.module_cursor = (self.module_cursor + 1) % len;
        }
    }

    pub fn select_previous_module(&mut self) {
        let len = self.track.modules().len();
        if len > 0 {
            self.module_cursor = (self.module_cursor + len - 1) % len;
        }
    }

    /// Starts, continues or reviews the highlighted module.
    pub fn open_selected_module(&mut self) {
        let Some((module_id, title)) = self.selected_module().map(|m| (m.id, m.title.clone()))
        else {
            return;
        };

        let Some(assessment) = self.catalog.assessment(module_id).cloned() else {
            self.notice = Some(format!("No assessment is available for {}", title));
            return;
        };

        match self.track.start(module_id) {
            Ok(()) => self.show(Screen::Assessment(AssessmentScreen {
                module_id,
                run: AssessmentRun::start(assessment),
                cursor: 0,
            })),
            Err(ProgressError::Locked(_)) => {
                self.notice =
                    Some("Complete the previous module to unlock this one.".to_string());
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    // Assessment

    pub fn move_option_cursor(&mut self, forward: bool) {
        if let Screen::Assessment(screen) = &mut self.screen {
            let len = screen.run.current_question().options.len();
            screen.cursor = if forward {
                (screen.cursor + 1) % len
            } else {
                (screen.cursor + len - 1) % len
            };
        }
    }

    /// Records the highlighted option as the answer.
    pub fn choose_option(&mut self) {
        let Screen::Assessment(screen) = &mut self.screen else {
            return;
        };
        if let Err(err) = screen.run.select(screen.cursor) {
            self.notice = Some(err.to_string());
            return;
        }

        let answered = percent_of(screen.run.answers().len(), screen.run.total_questions());
        let module_id = screen.module_id;
        let recorded = self.track.get(module_id).map_or(0, |m| m.progress_percent);
        if answered > recorded {
            if let Err(err) = self.track.record_progress(module_id, answered) {
                warn!(module = module_id, error = %err, "could not record progress");
            }
        }
    }

    pub fn next_question(&mut self) {
        if let Screen::Assessment(screen) = &mut self.screen {
            if screen.run.next() {
                screen.cursor = screen.run.current_answer().unwrap_or(0);
            }
        }
    }

    pub fn previous_question(&mut self) {
        if let Screen::Assessment(screen) = &mut self.screen {
            if screen.run.previous() {
                screen.cursor = screen.run.current_answer().unwrap_or(0);
            }
        }
    }

    pub fn jump_to_question(&mut self, position: usize) {
        if let Screen::Assessment(screen) = &mut self.screen {
            if screen.run.jump(position) {
                screen.cursor = screen.run.current_answer().unwrap_or(0);
            }
        }
    }

    /// Grades the attempt, completes its module and shows the result.
    pub fn submit_assessment(&mut self) {
        let Screen::Assessment(screen) = &self.screen else {
            return;
        };

        let report = match screen.run.submit() {
            Ok(report) => report,
            Err(err) => {
                self.notice = Some(err.to_string());
                return;
            }
        };
        let module_id = screen.module_id;
        let title = screen.run.assessment().title().to_string();

        let unlocked = match self.track.complete(module_id, report.percent) {
            Ok(ids) => ids
                .into_iter()
                .filter_map(|id| self.track.get(id).map(|m| m.title.clone()))
                .collect(),
            Err(err) => {
                error!(module = module_id, error = %err, "could not record completion");
                Vec::new()
            }
        };

        self.show(Screen::Result(ResultScreen {
            title,
            report,
            unlocked,
            scroll: 0,
        }));
    }

    /// Abandons the attempt and returns to the job seeker dashboard.
    pub fn leave_assessment(&mut self) {
        self.open_role_dashboard(Role::JobSeeker);
    }

    // Results

    pub fn scroll_results_down(&mut self) {
        if let Screen::Result(screen) = &mut self.screen {
            let max_scroll = screen.report.breakdown.len().saturating_sub(1);
            screen.scroll = (screen.scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        if let Screen::Result(screen) = &mut self.screen {
            screen.scroll = screen.scroll.saturating_sub(1);
        }
    }

    pub fn finish_result(&mut self) {
        self.open_role_dashboard(Role::JobSeeker);
    }

    // Job list

    /// Open jobs matching the current filter.
    pub fn job_results(&self) -> Vec<&Job> {
        self.board.search(&self.job_filter)
    }

    pub fn job_filter(&self) -> &JobFilter {
        &self.job_filter
    }

    pub fn job_cursor(&self) -> usize {
        self.job_cursor
    }

    pub fn selected_job(&self) -> Option<&Job> {
        self.job_results().get(self.job_cursor).copied()
    }

    pub fn open_jobs(&mut self) {
        self.job_cursor = 0;
        self.show(Screen::Jobs { searching: false });
    }

    pub fn select_next_job(&mut self) {
        let len = self.job_results().len();
        if len > 0 {
            self.job_cursor = (self.job_cursor + 1) % len;
        }
    }

    pub fn select_previous_job(&mut self) {
        let len = self.job_results().len();
        if len > 0 {
            self.job_cursor = (self.job_cursor + len - 1) % len;
        }
    }

    pub fn set_job_searching(&mut self, on: bool) {
        if let Screen::Jobs { searching } = &mut self.screen {
            *searching = on;
        }
    }

    pub fn job_search_input(&mut self, c: char) {
        self.job_filter.query.push(c);
        self.job_cursor = 0;
    }

    pub fn job_search_backspace(&mut self) {
        self.job_filter.query.pop();
        self.job_cursor = 0;
    }

    /// Steps the city filter through every city, then back to all cities.
    pub fn cycle_job_city(&mut self) {
        let cities = self.board.cities();
        let position = self
            .job_filter
            .city
            .as_ref()
            .and_then(|city| cities.iter().position(|c| c == city));
        self.job_filter.city = match position {
            None => cities.first().cloned(),
            Some(i) => cities.get(i + 1).cloned(),
        };
        self.job_cursor = 0;
    }

    pub fn toggle_remote_only(&mut self) {
        self.job_filter.remote_only = !self.job_filter.remote_only;
        self.job_cursor = 0;
    }

    pub fn clear_job_filter(&mut self) {
        self.job_filter = JobFilter::default();
        self.job_cursor = 0;
    }

    // Applications

    /// The signed-in user's applications, newest first.
    pub fn my_applications(&self) -> Vec<&Application> {
        match self.user() {
            Some(user) => self.board.applications_by(&user.email),
            None => Vec::new(),
        }
    }

    /// Opens the application form for the highlighted job.
    pub fn open_application(&mut self) {
        let Some((job_id, title)) = self.selected_job().map(|j| (j.id, j.title.clone())) else {
            return;
        };
        let applied = self
            .user()
            .is_some_and(|user| self.board.has_applied(job_id, &user.email));
        if applied {
            self.notice = Some(format!("You have already applied to {}", title));
            return;
        }

        let form = ApplicationForm::for_user(self.user());
        self.show(Screen::JobApplication(ApplicationScreen {
            job_id,
            state: FormState::new(form),
        }));
    }

    fn submit_application(&mut self) {
        let Screen::JobApplication(screen) = &mut self.screen else {
            return;
        };
        let application = match screen.state.form.validate() {
            Ok(application) => application,
            Err(errors) => {
                screen.state.errors = errors;
                screen.state.focus_first_error();
                return;
            }
        };

        let job_id = screen.job_id;
        match self.board.apply(job_id, application, Self::today()) {
            Ok(_) => {
                let company = self
                    .board
                    .job(job_id)
                    .map(|job| job.company.clone())
                    .unwrap_or_default();
                self.show(Screen::Jobs { searching: false });
                self.notice = Some(format!("Application sent to {}", company));
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    // Employer postings

    /// Postings owned by the signed-in account, or by guests.
    pub fn my_postings(&self) -> Vec<&Job> {
        self.board.posted_by(self.user().map(|u| u.email.as_str()))
    }

    pub fn posting_cursor(&self) -> usize {
        self.posting_cursor
    }

    pub fn select_next_posting(&mut self) {
        let len = self.my_postings().len();
        if len > 0 {
            self.posting_cursor = (self.posting_cursor + 1) % len;
        }
    }

    pub fn select_previous_posting(&mut self) {
        let len = self.my_postings().len();
        if len > 0 {
            self.posting_cursor = (self.posting_cursor + len - 1) % len;
        }
    }

    /// Pauses or reopens the highlighted posting.
    pub fn toggle_selected_posting(&mut self) {
        let Some(job_id) = self.my_postings().get(self.posting_cursor).map(|j| j.id) else {
            return;
        };
        match self.board.toggle_posting(job_id) {
            Ok(status) => self.notice = Some(format!("Posting is now {}", status.label())),
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    pub fn open_posting(&mut self) {
        let company = self
            .profile()
            .and_then(|p| p.company_name.clone())
            .unwrap_or_default();
        self.show(Screen::JobPosting(FormState::new(JobPostingForm::with_company(company))));
    }

    fn submit_posting(&mut self) {
        let Screen::JobPosting(state) = &mut self.screen else {
            return;
        };
        let posting = match state.form.validate(Self::today()) {
            Ok(posting) => posting,
            Err(errors) => {
                state.errors = errors;
                state.focus_first_error();
                return;
            }
        };

        let title = posting.title.clone();
        let owner = self.session.user().map(|u| u.email.clone());
        let id = self.board.post(posting, owner.as_deref(), Self::today());
        self.posting_cursor = self
            .my_postings()
            .iter()
            .position(|j| j.id == id)
            .unwrap_or(0);
        self.return_to_dashboard();
        self.notice = Some(format!("Posted {}", title));
    }

    // Profile

    pub fn open_profile(&mut self) {
        let Some(user) = self.user() else {
            self.notice = Some("Sign in to edit your profile.".to_string());
            return;
        };
        let profile = self.profiles.get(&user.email).cloned().unwrap_or_default();
        let form = ProfileForm::edit(user, &profile);
        self.show(Screen::Profile(FormState::new(form)));
    }

    fn save_profile(&mut self) {
        let Screen::Profile(state) = &mut self.screen else {
            return;
        };
        let (name, profile) = match state.form.validate() {
            Ok(saved) => saved,
            Err(errors) => {
                state.errors = errors;
                state.focus_first_error();
                return;
            }
        };
        let Some(user) = self.session.user().cloned() else {
            return;
        };

        if name != user.name {
            let renamed = User {
                name: name.clone(),
                ..user.clone()
            };
            if let Err(err) = self.session.sign_in(renamed) {
                error!(error = %err, "failed to persist session");
                self.notice = Some(format!("Could not save profile: {}", err));
                return;
            }
        }
        info!(email = %user.email, "profile saved");
        self.profiles.insert(user.email, profile);
        self.return_to_dashboard();
        self.notice = Some("Profile saved".to_string());
    }

    // Forms

    /// The form on screen, if any.
    pub fn form_mut(&mut self) -> Option<&mut dyn FormInput> {
        match &mut self.screen {
            Screen::JobPosting(state) => Some(state),
            Screen::JobApplication(screen) => Some(&mut screen.state),
            Screen::Profile(state) => Some(state),
            _ => None,
        }
    }

    pub fn submit_form(&mut self) {
        match self.screen {
            Screen::JobPosting(_) => self.submit_posting(),
            Screen::JobApplication(_) => self.submit_application(),
            Screen::Profile(_) => self.save_profile(),
            _ => {}
        }
    }

    /// Leaves the form without saving.
    pub fn cancel_form(&mut self) {
        match self.screen {
            Screen::JobApplication(_) => self.show(Screen::Jobs { searching: false }),
            _ => self.return_to_dashboard(),
        }
    }
}
