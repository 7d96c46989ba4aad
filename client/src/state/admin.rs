//! Admin back-office state: portfolio projects, client users, payments.
//!
//! DESIGN
//! ======
//! Each section owns a small in-memory collection seeded when the dashboard
//! mounts. Operations are plain methods so the view layer only wires events
//! to them; nothing is persisted or sent anywhere.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// Sidebar sections of the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminView {
    #[default]
    Overview,
    Projects,
    Users,
    Payments,
    Messages,
}

impl AdminView {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Projects, Self::Users, Self::Payments, Self::Messages];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Projects => "Projects",
            Self::Users => "Users",
            Self::Payments => "Payments",
            Self::Messages => "Messages",
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// =============================================================================
// OVERVIEW
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityStatus {
    Pending,
    Completed,
    New,
}

impl ActivityStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::New => "new",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub user: &'static str,
    pub action: &'static str,
    pub time: &'static str,
    pub status: ActivityStatus,
}

pub fn overview_stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "Total Projects", value: "24", change: "+3 this month" },
        StatCard { label: "Active Users", value: "156", change: "+12 this week" },
        StatCard { label: "Total Revenue", value: "₹2.4L", change: "+18% from last month" },
        StatCard { label: "Pending Requests", value: "8", change: "Needs attention" },
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            user: "John Doe",
            action: "submitted a new project",
            time: "2 hours ago",
            status: ActivityStatus::Pending,
        },
        Activity {
            user: "Jane Smith",
            action: "made a payment",
            time: "5 hours ago",
            status: ActivityStatus::Completed,
        },
        Activity { user: "Mike Johnson", action: "sent a message", time: "1 day ago", status: ActivityStatus::New },
        Activity {
            user: "Sarah Wilson",
            action: "project milestone completed",
            time: "2 days ago",
            status: ActivityStatus::Completed,
        },
    ]
}

/// Uppercase first letter of each whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

// =============================================================================
// PORTFOLIO PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishStatus {
    Published,
    Draft,
}

impl PublishStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Published => Self::Draft,
            Self::Draft => Self::Published,
        }
    }
}

/// Categories offered by the add-project form.
pub const PROJECT_CATEGORIES: [&str; 4] = ["Web Development", "Mobile App", "UI/UX Design", "Branding"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioProject {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub year: String,
    pub status: PublishStatus,
    pub featured: bool,
}

/// Add-project form payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPortfolioProject {
    pub title: String,
    pub category: String,
    pub description: String,
    /// Comma separated.
    pub tags: String,
    pub year: String,
}

impl Default for NewPortfolioProject {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: PROJECT_CATEGORIES[0].to_owned(),
            description: String::new(),
            tags: String::new(),
            year: String::new(),
        }
    }
}

/// Split a comma separated tag list, dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned).collect()
}

/// Ordered showcase list; order is the display order on the public site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectBoard {
    pub items: Vec<PortfolioProject>,
}

impl ProjectBoard {
    pub fn seeded() -> Self {
        let seed = |id: &str, title: &str, category: &str, status: PublishStatus, featured: bool| PortfolioProject {
            id: id.to_owned(),
            title: title.to_owned(),
            category: category.to_owned(),
            description: String::new(),
            tags: Vec::new(),
            year: String::new(),
            status,
            featured,
        };
        Self {
            items: vec![
                seed("1", "E-Commerce Platform", "Web Development", PublishStatus::Published, true),
                seed("2", "Healthcare App", "Mobile App", PublishStatus::Published, true),
                seed("3", "Real Estate Portal", "Web Development", PublishStatus::Draft, false),
                seed("4", "Fitness Tracker", "Mobile App", PublishStatus::Published, true),
            ],
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }

    /// Move `active` to the slot currently held by `over`. Returns `false`
    /// when either id is unknown or both are the same item.
    pub fn move_project(&mut self, active: &str, over: &str) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (self.index_of(active), self.index_of(over)) else {
            return false;
        };
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    pub fn toggle_status(&mut self, id: &str) {
        if let Some(project) = self.items.iter_mut().find(|p| p.id == id) {
            project.status = project.status.flipped();
        }
    }

    pub fn toggle_featured(&mut self, id: &str) {
        if let Some(project) = self.items.iter_mut().find(|p| p.id == id) {
            project.featured = !project.featured;
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.items.retain(|p| p.id != id);
    }

    /// Append a new draft project, returning its id.
    pub fn add(&mut self, new: NewPortfolioProject) -> String {
        let id = new_id();
        self.items.push(PortfolioProject {
            id: id.clone(),
            title: new.title.trim().to_owned(),
            category: new.category,
            description: new.description.trim().to_owned(),
            tags: parse_tags(&new.tags),
            year: new.year.trim().to_owned(),
            status: PublishStatus::Draft,
            featured: false,
        });
        id
    }
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EngagementStatus {
    #[default]
    Pending,
    Active,
    Completed,
    OnHold,
}

impl EngagementStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Active, Self::Completed, Self::OnHold];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_name: String,
    pub project_status: EngagementStatus,
    pub joined_date: String,
    pub total_paid: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDirectory {
    pub users: Vec<ClientUser>,
}

impl UserDirectory {
    pub fn seeded() -> Self {
        Self {
            users: vec![
                ClientUser {
                    id: "1".to_owned(),
                    name: "John Doe".to_owned(),
                    email: "john@example.com".to_owned(),
                    phone: "+91 98765 43210".to_owned(),
                    project_name: "E-Commerce Platform".to_owned(),
                    project_status: EngagementStatus::Active,
                    joined_date: "2024-01-15".to_owned(),
                    total_paid: "₹50,000".to_owned(),
                },
                ClientUser {
                    id: "2".to_owned(),
                    name: "Jane Smith".to_owned(),
                    email: "jane@example.com".to_owned(),
                    phone: "+91 87654 32109".to_owned(),
                    project_name: "Healthcare App".to_owned(),
                    project_status: EngagementStatus::Completed,
                    joined_date: "2023-12-10".to_owned(),
                    total_paid: "₹75,000".to_owned(),
                },
            ],
        }
    }

    /// Users whose name or email contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<ClientUser> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Append `user` under a fresh id, returning it.
    pub fn add(&mut self, user: ClientUser) -> String {
        let id = new_id();
        self.users.push(ClientUser { id: id.clone(), ..user });
        id
    }

    pub fn delete(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
    }
}

// =============================================================================
// PAYMENTS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentStatus {
    #[default]
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Completed, Self::Pending, Self::Failed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Upi,
    BankTransfer,
    Cash,
    Cheque,
}

impl PaymentMethod {
    pub const ALL: [Self; 4] = [Self::Upi, Self::BankTransfer, Self::Cash, Self::Cheque];

    pub fn label(self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::BankTransfer => "Bank Transfer",
            Self::Cash => "Cash",
            Self::Cheque => "Cheque",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == raw)
    }
}

/// Status tabs above the payments table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl PaymentFilter {
    pub const TABS: [Self; 4] = [
        Self::All,
        Self::Only(PaymentStatus::Completed),
        Self::Only(PaymentStatus::Pending),
        Self::Only(PaymentStatus::Failed),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    pub fn matches(self, status: PaymentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Payment {
    pub id: String,
    pub user_name: String,
    pub project_name: String,
    /// Display amount, e.g. `₹50,000`.
    pub amount: String,
    pub transaction_id: String,
    pub payment_date: String,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
}

/// Parse a display amount by dropping `₹` and `,` and reading the leading
/// digits. Anything without leading digits counts as zero; amounts past
/// `u64::MAX` clamp to it.
pub fn parse_amount(raw: &str) -> u64 {
    raw.chars()
        .filter(|c| *c != '₹' && *c != ',')
        .skip_while(|c| c.is_whitespace())
        .map_while(|c| c.to_digit(10))
        .fold(0_u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// `₹` plus the amount grouped in thousands.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentLedger {
    pub payments: Vec<Payment>,
}

impl PaymentLedger {
    pub fn seeded() -> Self {
        Self {
            payments: vec![
                Payment {
                    id: "1".to_owned(),
                    user_name: "John Doe".to_owned(),
                    project_name: "E-Commerce Platform".to_owned(),
                    amount: "₹50,000".to_owned(),
                    transaction_id: "TXN123456789".to_owned(),
                    payment_date: "2024-01-20".to_owned(),
                    status: PaymentStatus::Completed,
                    method: PaymentMethod::Upi,
                },
                Payment {
                    id: "2".to_owned(),
                    user_name: "Jane Smith".to_owned(),
                    project_name: "Healthcare App".to_owned(),
                    amount: "₹75,000".to_owned(),
                    transaction_id: "TXN987654321".to_owned(),
                    payment_date: "2024-01-18".to_owned(),
                    status: PaymentStatus::Pending,
                    method: PaymentMethod::BankTransfer,
                },
            ],
        }
    }

    pub fn filtered(&self, filter: PaymentFilter) -> Vec<Payment> {
        self.payments.iter().filter(|p| filter.matches(p.status)).cloned().collect()
    }

    fn sum_where(&self, status: PaymentStatus) -> u64 {
        self.payments
            .iter()
            .filter(|p| p.status == status)
            .map(|p| parse_amount(&p.amount))
            .fold(0, u64::saturating_add)
    }

    pub fn total_revenue(&self) -> u64 {
        self.sum_where(PaymentStatus::Completed)
    }

    pub fn pending_amount(&self) -> u64 {
        self.sum_where(PaymentStatus::Pending)
    }

    pub fn add(&mut self, payment: Payment) -> String {
        let id = new_id();
        self.payments.push(Payment { id: id.clone(), ..payment });
        id
    }

    /// Settle a pending payment as completed or failed. Non-pending records
    /// are left alone; returns whether anything changed.
    pub fn resolve(&mut self, id: &str, outcome: PaymentStatus) -> bool {
        match self.payments.iter_mut().find(|p| p.id == id) {
            Some(payment) if payment.status == PaymentStatus::Pending && outcome != PaymentStatus::Pending => {
                payment.status = outcome;
                true
            }
            _ => false,
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.payments.retain(|p| p.id != id);
    }
}
