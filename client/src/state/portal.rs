//! Client dashboard state: projects, conversations, notifications, account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs `/dashboard` and its profile, settings, and notifications pages.
//! None of these routes sit behind the admin gate. Data is seeded per mount.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use crate::util::validation::{ProjectRequestErrors, validate_project_request};

/// How long save/change confirmations stay on screen.
pub const FLASH_MESSAGE_MS: u64 = 3000;

// =============================================================================
// DASHBOARD ROOT VIEW
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardView {
    #[default]
    Projects,
    Messages,
}

/// Initial view and modal state derived from `?view=` and `?action=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardEntry {
    pub view: DashboardView,
    pub open_new_project: bool,
}

impl DashboardEntry {
    pub fn from_query(view: Option<&str>, action: Option<&str>) -> Self {
        Self {
            view: if view == Some("messages") { DashboardView::Messages } else { DashboardView::Projects },
            open_new_project: action == Some("new-project"),
        }
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStage {
    InProgress,
    Review,
    Completed,
}

impl ProjectStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            Self::Review => "review",
            Self::Completed => "completed",
        }
    }

    /// Modifier for the status badge class.
    pub fn slug(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Completed => "completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientProject {
    pub id: u32,
    pub name: &'static str,
    pub stage: ProjectStage,
    pub progress: u8,
    pub deadline: &'static str,
    pub messages: u32,
    pub description: &'static str,
}

pub fn client_projects() -> Vec<ClientProject> {
    vec![
        ClientProject {
            id: 1,
            name: "E-Commerce Website",
            stage: ProjectStage::InProgress,
            progress: 65,
            deadline: "Dec 20, 2025",
            messages: 12,
            description: "Modern e-commerce platform with payment integration",
        },
        ClientProject {
            id: 2,
            name: "Mobile App Design",
            stage: ProjectStage::Review,
            progress: 90,
            deadline: "Nov 15, 2025",
            messages: 5,
            description: "iOS and Android app design with Figma prototypes",
        },
        ClientProject {
            id: 3,
            name: "Brand Identity",
            stage: ProjectStage::Completed,
            progress: 100,
            deadline: "Nov 1, 2025",
            messages: 23,
            description: "Complete brand identity package with logo and guidelines",
        },
    ]
}

/// `(value, label)` pairs for the new-project type picker; empty value is the prompt.
pub const PROJECT_TYPES: [(&str, &str); 6] = [
    ("", "Select project type"),
    ("website", "Website Development"),
    ("app", "Mobile App"),
    ("design", "Design Services"),
    ("branding", "Brand Identity"),
    ("other", "Other"),
];

/// File picked for a new-project request. Only name and size are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub size: u64,
}

/// New-project modal form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
    pub project_type: String,
    pub budget: String,
    pub deadline: String,
    pub description: String,
    pub files: Vec<AttachedFile>,
    pub errors: ProjectRequestErrors,
}

impl ProjectRequest {
    pub fn attach(&mut self, picked: impl IntoIterator<Item = AttachedFile>) {
        self.files.extend(picked);
    }

    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    /// Validate; on success reset the form and return true.
    pub fn submit(&mut self) -> bool {
        self.errors = validate_project_request(&self.name, &self.project_type, &self.description);
        if !self.errors.is_valid() {
            return false;
        }
        *self = Self::default();
        true
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Client,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: Sender,
    pub text: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub id: u32,
    pub project_name: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread: u32,
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inbox {
    pub conversations: Vec<Conversation>,
    pub selected: u32,
}

fn message(id: u32, sender: Sender, text: &str, time: &str) -> ChatMessage {
    ChatMessage { id, sender, text: text.to_owned(), time: time.to_owned() }
}

impl Inbox {
    pub fn seeded() -> Self {
        let conversations = vec![
            Conversation {
                id: 1,
                project_name: "E-Commerce Website".to_owned(),
                last_message: "Great! I'll send the updated designs by tomorrow.".to_owned(),
                timestamp: "2 hours ago".to_owned(),
                unread: 2,
                messages: vec![
                    message(1, Sender::Client, "Hi! How's the progress on the homepage?", "10:30 AM"),
                    message(
                        2,
                        Sender::Admin,
                        "Hello! We're making great progress. The responsive design is almost complete.",
                        "10:45 AM",
                    ),
                    message(3, Sender::Client, "That's awesome! Can I see a preview?", "11:00 AM"),
                    message(4, Sender::Admin, "Great! I'll send the updated designs by tomorrow.", "2:30 PM"),
                ],
            },
            Conversation {
                id: 2,
                project_name: "Mobile App Design".to_owned(),
                last_message: "The color scheme looks perfect now!".to_owned(),
                timestamp: "1 day ago".to_owned(),
                unread: 0,
                messages: vec![
                    message(1, Sender::Admin, "Here's the updated color palette for the app.", "Yesterday"),
                    message(2, Sender::Client, "The color scheme looks perfect now!", "Yesterday"),
                ],
            },
            Conversation {
                id: 3,
                project_name: "Brand Identity".to_owned(),
                last_message: "Thank you for the quick turnaround!".to_owned(),
                timestamp: "3 days ago".to_owned(),
                unread: 1,
                messages: vec![
                    message(1, Sender::Admin, "Your brand guidelines document is ready!", "3 days ago"),
                    message(2, Sender::Client, "Thank you for the quick turnaround!", "3 days ago"),
                ],
            },
        ];
        Self { conversations, selected: 1 }
    }

    pub fn selected(&self) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == self.selected)
    }

    pub fn select(&mut self, id: u32) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.selected = id;
        }
    }

    /// Append a client message to the selected conversation. Blank text is
    /// ignored; returns whether a message was added.
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let selected = self.selected;
        let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == selected) else {
            return false;
        };
        let next_id = conversation.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        conversation.messages.push(message(next_id, Sender::Client, text, "Just now"));
        text.clone_into(&mut conversation.last_message);
        "Just now".clone_into(&mut conversation.timestamp);
        true
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Project,
    Message,
    Payment,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub read: bool,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    pub const TABS: [Self; 5] = [
        Self::All,
        Self::Unread,
        Self::Kind(NotificationKind::Project),
        Self::Kind(NotificationKind::Message),
        Self::Kind(NotificationKind::Payment),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Kind(NotificationKind::Project) => "Projects",
            Self::Kind(NotificationKind::Message) => "Messages",
            Self::Kind(NotificationKind::Payment) => "Payments",
            Self::Kind(NotificationKind::System) => "System",
        }
    }

    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
            Self::Kind(kind) => notification.kind == kind,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    pub items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn seeded() -> Self {
        use NotificationKind::{Message, Payment, Project, System};
        Self {
            items: vec![
                Notification {
                    id: 1,
                    kind: Project,
                    title: "Project Update",
                    message: "Your E-Commerce Website project is now in review",
                    time: "2 hours ago",
                    read: false,
                    icon: "📦",
                },
                Notification {
                    id: 2,
                    kind: Message,
                    title: "New Message",
                    message: "Admin replied to your Mobile App Design inquiry",
                    time: "5 hours ago",
                    read: false,
                    icon: "💬",
                },
                Notification {
                    id: 3,
                    kind: Payment,
                    title: "Payment Received",
                    message: "Payment for Brand Identity project confirmed",
                    time: "1 day ago",
                    read: true,
                    icon: "💰",
                },
                Notification {
                    id: 4,
                    kind: Project,
                    title: "Project Started",
                    message: "Mobile App Design project has been initiated",
                    time: "2 days ago",
                    read: true,
                    icon: "🚀",
                },
                Notification {
                    id: 5,
                    kind: Message,
                    title: "New Message",
                    message: "You have a new message regarding your project timeline",
                    time: "3 days ago",
                    read: true,
                    icon: "💬",
                },
                Notification {
                    id: 6,
                    kind: System,
                    title: "System Update",
                    message: "New features have been added to your dashboard",
                    time: "4 days ago",
                    read: true,
                    icon: "⚙️",
                },
                Notification {
                    id: 7,
                    kind: Project,
                    title: "Milestone Completed",
                    message: "First milestone of E-Commerce Website completed",
                    time: "5 days ago",
                    read: true,
                    icon: "✅",
                },
                Notification {
                    id: 8,
                    kind: Payment,
                    title: "Invoice Sent",
                    message: "Invoice for upcoming project has been sent",
                    time: "1 week ago",
                    read: true,
                    icon: "📄",
                },
            ],
        }
    }

    pub fn filtered(&self, filter: NotificationFilter) -> Vec<Notification> {
        self.items.iter().filter(|n| filter.matches(n)).cloned().collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: u32) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    pub fn delete(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// Header line above the list.
    pub fn summary(&self) -> String {
        match self.unread_count() {
            0 => "All caught up!".to_owned(),
            1 => "You have 1 unread notification".to_owned(),
            n => format!("You have {n} unread notifications"),
        }
    }
}

// =============================================================================
// PROFILE AND SETTINGS
// =============================================================================

pub const PROFILE_SAVED_MESSAGE: &str = "Profile updated successfully!";
pub const ACCOUNT_SAVED_MESSAGE: &str = "Account settings saved successfully!";
pub const PASSWORD_CHANGED_MESSAGE: &str = "Password changed successfully!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub location: String,
    pub bio: String,
    /// Object URL of a locally picked image; never uploaded.
    pub avatar_url: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            phone: "+1 234 567 8900".to_owned(),
            company: "Acme Inc.".to_owned(),
            location: "New York, USA".to_owned(),
            bio: "Passionate entrepreneur building digital products that make a difference.".to_owned(),
            avatar_url: None,
        }
    }
}

pub fn profile_stats() -> [(&'static str, &'static str); 4] {
    [("Total Projects", "12"), ("Completed", "8"), ("In Progress", "3"), ("Pending Review", "1")]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl Default for AccountSettings {
    fn default() -> Self {
        let profile = Profile::default();
        Self { name: profile.name, email: profile.email, phone: profile.phone, company: profile.company }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email_notifications: bool,
    pub project_updates: bool,
    pub message_alerts: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self { email_notifications: true, project_updates: true, message_alerts: true }
    }
}
