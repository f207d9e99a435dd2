use chrono::{Days, Months, NaiveDate};

use crate::models::{Answers, AnswerValue, Question, VendorCategory};

/// Guest counts strictly above this are treated as large events, which
/// lengthens several lead times and boosts venue/entertainment scaling.
pub const LARGE_EVENT_THRESHOLD: u32 = 150;

/// The enumerable catalog of recognized event type labels, used by
/// callers for suggestions and autocomplete.
pub const EVENT_TYPES: &[&str] = &[
    // Weddings & celebrations
    "Lebanese Wedding",
    "Christian Wedding",
    "Muslim Wedding",
    "Druze Wedding",
    "Civil Wedding",
    "Engagement Party",
    "Henna Night",
    "Bachelor/Bachelorette Party",
    "Wedding Anniversary",
    // Religious & cultural events
    "Baptism",
    "First Communion",
    "Confirmation",
    "Bar/Bat Mitzvah",
    "Eid al-Fitr Celebration",
    "Eid al-Adha Celebration",
    "Christmas Celebration",
    "Easter Celebration",
    "Ramadan Iftar",
    "Mawlid al-Nabi",
    "Ashura Commemoration",
    // Life celebrations
    "Birthday Party",
    "Sweet 16",
    "18th Birthday",
    "Graduation Party",
    "Baby Shower",
    "Gender Reveal",
    "Newborn Welcoming (Aqiqah)",
    "Retirement Party",
    "Farewell Party",
    // Corporate & professional
    "Corporate Conference",
    "Product Launch",
    "Company Anniversary",
    "Team Building Event",
    "Business Networking Event",
    "Award Ceremony",
    "Seminar/Workshop",
    "Trade Show",
    // Cultural & community
    "Cultural Festival",
    "Charity Gala",
    "Fundraising Event",
    "Art Exhibition Opening",
    "Book Launch",
    "Fashion Show",
    "Music Concert",
    "Theater Performance",
    // Seasonal & holiday
    "New Year's Eve Party",
    "Valentine's Day Event",
    "Mother's Day Celebration",
    "Father's Day Celebration",
    "Independence Day Celebration",
    "Martyrs' Day Commemoration",
];

/// Specialized task generator families, dispatched by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFamily {
    Wedding,
    Corporate,
    Birthday,
    Religious,
}

/// Ordered dispatch rules: the first family whose keyword appears in the
/// (lowercased) event type wins. Keeping this a table makes the matching
/// order auditable.
const FAMILY_KEYWORDS: &[(EventFamily, &[&str])] = &[
    (EventFamily::Wedding, &["wedding"]),
    (EventFamily::Corporate, &["corporate", "conference"]),
    (EventFamily::Birthday, &["birthday"]),
    (
        EventFamily::Religious,
        &[
            "eid",
            "christmas",
            "baptism",
            "communion",
            "confirmation",
            "ramadan",
            "easter",
            "religious",
        ],
    ),
];

/// Finds the specialized generator family for an event type, if any.
pub fn match_family(event_type: &str) -> Option<EventFamily> {
    let lower = event_type.to_lowercase();
    FAMILY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(family, _)| *family)
}

pub fn is_wedding(event_type: &str) -> bool {
    matches!(match_family(event_type), Some(EventFamily::Wedding))
}

pub fn is_corporate(event_type: &str) -> bool {
    matches!(match_family(event_type), Some(EventFamily::Corporate))
}

/// A calendar duration relative to the event date.
///
/// Offsets subtract (or add, for the post-event variant) whole calendar
/// units, so "2 months before June 30" lands on April 30 regardless of
/// month lengths in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineOffset {
    MonthsBefore(u32),
    WeeksBefore(u32),
    DaysBefore(u32),
    WeeksAfter(u32),
}

impl DeadlineOffset {
    /// Resolves the offset against the event date. The checked arithmetic
    /// only fails near chrono's representable range, in which case the
    /// event date itself is returned.
    pub fn resolve(&self, event_date: NaiveDate) -> NaiveDate {
        match *self {
            DeadlineOffset::MonthsBefore(m) => event_date
                .checked_sub_months(Months::new(m))
                .unwrap_or(event_date),
            DeadlineOffset::WeeksBefore(w) => event_date
                .checked_sub_days(Days::new(u64::from(w) * 7))
                .unwrap_or(event_date),
            DeadlineOffset::DaysBefore(d) => event_date
                .checked_sub_days(Days::new(u64::from(d)))
                .unwrap_or(event_date),
            DeadlineOffset::WeeksAfter(w) => event_date
                .checked_add_days(Days::new(u64::from(w) * 7))
                .unwrap_or(event_date),
        }
    }
}

/// How a template's base cost is derived before any scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostBasis {
    /// Absolute amount in currency units.
    Fixed(f64),
    /// Amount per invited guest.
    PerGuest(f64),
    /// Fraction of the total event budget.
    BudgetShare(f64),
}

impl CostBasis {
    pub fn base_amount(&self, budget: f64, guest_count: u32) -> f64 {
        match *self {
            CostBasis::Fixed(amount) => amount,
            CostBasis::PerGuest(per_guest) => per_guest * f64::from(guest_count),
            CostBasis::BudgetShare(fraction) => budget * fraction,
        }
    }

    /// Budget-share templates are the only ones that carry a recommended
    /// (quality-scaled) figure.
    pub fn is_budget_share(&self) -> bool {
        matches!(self, CostBasis::BudgetShare(_))
    }
}

/// A task blueprint produced by the catalog; the timeline generator turns
/// these into [`crate::models::EventTask`]s.
#[derive(Debug, Clone)]
pub struct TaskTemplate {
    pub task: String,
    pub offset: DeadlineOffset,
    pub cost: CostBasis,
    pub category: Option<VendorCategory>,
    pub description: String,
}

impl TaskTemplate {
    fn new(
        task: &str,
        offset: DeadlineOffset,
        cost: CostBasis,
        category: Option<VendorCategory>,
        description: &str,
    ) -> Self {
        TaskTemplate {
            task: task.to_string(),
            offset,
            cost,
            category,
            description: description.to_string(),
        }
    }
}

/// Generation inputs the catalog consults while building templates.
pub struct TaskContext<'a> {
    pub event_type: &'a str,
    pub guest_count: u32,
    pub budget: f64,
    pub answers: &'a Answers,
}

impl TaskContext<'_> {
    pub fn is_large(&self) -> bool {
        self.guest_count > LARGE_EVENT_THRESHOLD
    }

    /// True when the given question option was answered truthily.
    pub fn answered(&self, option: &str) -> bool {
        self.answers.get(option).is_some_and(AnswerValue::is_truthy)
    }
}

/// A declarative "if this option was picked, append this task" rule.
struct AnswerRule {
    option: &'static str,
    build: fn(&TaskContext) -> TaskTemplate,
}

fn apply_answer_rules(rules: &[AnswerRule], ctx: &TaskContext, out: &mut Vec<TaskTemplate>) {
    for rule in rules {
        if ctx.answered(rule.option) {
            out.push((rule.build)(ctx));
        }
    }
}

use self::DeadlineOffset::{DaysBefore, MonthsBefore, WeeksAfter, WeeksBefore};
use crate::models::VendorCategory as Cat;

const WEDDING_RULES: &[AnswerRule] = &[
    AnswerRule {
        option: "Traditional Zaffe Procession",
        build: |_| TaskTemplate::new(
            "Organize traditional Zaffe procession",
            MonthsBefore(3),
            CostBasis::BudgetShare(0.08),
            Some(Cat::Entertainment),
            "Coordinate traditional Lebanese wedding procession with musicians, dancers, and cultural elements",
        ),
    },
    AnswerRule {
        option: "Dabke Performance",
        build: |_| TaskTemplate::new(
            "Arrange Dabke performance and instruction",
            MonthsBefore(2),
            CostBasis::BudgetShare(0.05),
            Some(Cat::Entertainment),
            "Book professional Dabke performers and arrange for guest participation",
        ),
    },
    AnswerRule {
        option: "Traditional Lebanese Cuisine",
        build: |_| TaskTemplate::new(
            "Plan traditional Lebanese feast menu",
            MonthsBefore(3),
            // Covered by the catering budget; the task is a reminder.
            CostBasis::Fixed(0.0),
            None,
            "Include mezze, grilled meats, rice dishes, and traditional sweets like baklava and maamoul",
        ),
    },
    AnswerRule {
        option: "Live Arabic Music Band",
        build: |_| TaskTemplate::new(
            "Book live Arabic music band",
            MonthsBefore(4),
            CostBasis::BudgetShare(0.12),
            Some(Cat::Entertainment),
            "Secure popular Lebanese/Arabic band for live entertainment throughout the celebration",
        ),
    },
    AnswerRule {
        option: "Professional Photography & Videography",
        build: |_| TaskTemplate::new(
            "Book wedding photographer and videographer",
            MonthsBefore(5),
            CostBasis::BudgetShare(0.15),
            Some(Cat::PhotographyAndVideography),
            "Secure experienced wedding photographers familiar with Lebanese traditions and customs",
        ),
    },
    AnswerRule {
        option: "Elaborate Floral Arrangements",
        build: |_| TaskTemplate::new(
            "Design elaborate floral arrangements",
            MonthsBefore(2),
            CostBasis::BudgetShare(0.12),
            Some(Cat::Decoration),
            "Plan stunning floral displays including bridal bouquet, centerpieces, and venue decorations",
        ),
    },
    AnswerRule {
        option: "Wedding Cake & Sweets Table",
        build: |_| TaskTemplate::new(
            "Order wedding cake and traditional sweets",
            WeeksBefore(3),
            CostBasis::BudgetShare(0.06),
            Some(Cat::CateringAndSweets),
            "Design custom wedding cake and arrange traditional Lebanese sweets display",
        ),
    },
    AnswerRule {
        option: "Bridal Beauty Services",
        build: |_| TaskTemplate::new(
            "Book bridal beauty services",
            MonthsBefore(3),
            CostBasis::BudgetShare(0.04),
            Some(Cat::BeautyAndGrooming),
            "Schedule hair, makeup, and beauty treatments for bride and bridal party",
        ),
    },
];

const CORPORATE_RULES: &[AnswerRule] = &[
    AnswerRule {
        option: "Keynote Speakers",
        build: |_| TaskTemplate::new(
            "Secure keynote speakers and presenters",
            MonthsBefore(4),
            CostBasis::BudgetShare(0.20),
            None,
            "Book industry experts and thought leaders relevant to your event theme",
        ),
    },
    AnswerRule {
        option: "Audio/Visual Equipment",
        build: |_| TaskTemplate::new(
            "Arrange professional A/V equipment",
            MonthsBefore(2),
            CostBasis::BudgetShare(0.08),
            Some(Cat::LightingAndSound),
            "Ensure high-quality sound, lighting, and projection equipment for presentations",
        ),
    },
    AnswerRule {
        option: "Live Streaming Setup",
        build: |_| TaskTemplate::new(
            "Set up live streaming and recording",
            WeeksBefore(3),
            CostBasis::BudgetShare(0.05),
            Some(Cat::PhotographyAndVideography),
            "Arrange professional live streaming for remote attendees and event recording",
        ),
    },
    AnswerRule {
        option: "Networking Reception",
        build: |_| TaskTemplate::new(
            "Plan networking reception and activities",
            MonthsBefore(2),
            CostBasis::BudgetShare(0.15),
            None,
            "Design networking opportunities, icebreaker activities, and reception logistics",
        ),
    },
    AnswerRule {
        option: "Corporate Branding & Signage",
        build: |_| TaskTemplate::new(
            "Design corporate branding and signage",
            WeeksBefore(4),
            CostBasis::BudgetShare(0.06),
            Some(Cat::Decoration),
            "Create branded materials, banners, signage, and promotional items",
        ),
    },
    AnswerRule {
        option: "Professional Photography",
        build: |_| TaskTemplate::new(
            "Hire corporate event photographer",
            MonthsBefore(2),
            CostBasis::BudgetShare(0.07),
            Some(Cat::PhotographyAndVideography),
            "Document the event for marketing and corporate communications",
        ),
    },
];

const BIRTHDAY_RULES: &[AnswerRule] = &[
    AnswerRule {
        option: "Custom Birthday Cake",
        build: |ctx| {
            let milestone = ctx.answered("Milestone Birthday (18th, 21st, 30th, etc.)");
            TaskTemplate::new(
                "Order custom birthday cake",
                WeeksBefore(2),
                CostBasis::BudgetShare(if milestone { 0.08 } else { 0.05 }),
                Some(Cat::CateringAndSweets),
                "Design personalized birthday cake reflecting the celebrant's interests and theme",
            )
        },
    },
    AnswerRule {
        option: "Themed Decorations",
        build: |_| TaskTemplate::new(
            "Plan themed decorations and setup",
            WeeksBefore(2),
            CostBasis::BudgetShare(0.12),
            Some(Cat::Decoration),
            "Create cohesive theme with balloons, banners, table settings, and photo backdrops",
        ),
    },
    AnswerRule {
        option: "Entertainment & Activities",
        build: |ctx| {
            let child_party = ctx.answered("Children's Birthday Party");
            TaskTemplate::new(
                "Book entertainment and activities",
                WeeksBefore(3),
                CostBasis::BudgetShare(if child_party { 0.20 } else { 0.15 }),
                Some(Cat::Entertainment),
                if child_party {
                    "Arrange age-appropriate entertainment like clowns, magicians, or character appearances"
                } else {
                    "Book DJ, live music, or interactive entertainment suitable for adult celebration"
                },
            )
        },
    },
    AnswerRule {
        option: "Professional Photography",
        build: |_| TaskTemplate::new(
            "Hire birthday party photographer",
            WeeksBefore(3),
            CostBasis::BudgetShare(0.08),
            Some(Cat::PhotographyAndVideography),
            "Capture special moments and create lasting memories of the celebration",
        ),
    },
    AnswerRule {
        option: "Party Favors & Gifts",
        build: |ctx| {
            let child_party = ctx.answered("Children's Birthday Party");
            TaskTemplate::new(
                "Prepare party favors and gift bags",
                WeeksBefore(1),
                CostBasis::PerGuest(if child_party { 8.0 } else { 5.0 }),
                None,
                "Create memorable take-home gifts for guests",
            )
        },
    },
];

const RELIGIOUS_RULES: &[AnswerRule] = &[
    AnswerRule {
        option: "Traditional Religious Decorations",
        build: |_| TaskTemplate::new(
            "Arrange traditional religious decorations",
            WeeksBefore(2),
            CostBasis::BudgetShare(0.10),
            Some(Cat::Decoration),
            "Create appropriate religious and cultural decorative elements",
        ),
    },
    AnswerRule {
        option: "Traditional Cuisine",
        build: |_| TaskTemplate::new(
            "Plan traditional religious feast",
            WeeksBefore(3),
            CostBasis::Fixed(0.0),
            None,
            "Prepare traditional dishes appropriate for the religious celebration",
        ),
    },
    AnswerRule {
        option: "Religious Ceremony Coordination",
        build: |_| TaskTemplate::new(
            "Coordinate religious ceremony details",
            WeeksBefore(4),
            CostBasis::Fixed(200.0),
            None,
            "Work with religious leaders to plan ceremony logistics and requirements",
        ),
    },
    AnswerRule {
        option: "Community Involvement",
        build: |_| TaskTemplate::new(
            "Organize community participation",
            WeeksBefore(3),
            CostBasis::BudgetShare(0.05),
            None,
            "Coordinate with community members and religious organizations",
        ),
    },
];

/// The immutable rule catalog: question sets plus task template builders.
///
/// Built once at startup and passed by reference into the generator; it
/// never changes at runtime.
pub struct RuleCatalog {
    question_sets: Vec<(&'static str, Vec<Question>)>,
    default_questions: Vec<Question>,
}

impl RuleCatalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        RuleCatalog {
            question_sets: vec![
                ("Lebanese Wedding", wedding_questions()),
                ("Corporate Conference", corporate_questions()),
                ("Birthday", birthday_questions()),
                ("Eid al-Fitr Celebration", eid_questions()),
                ("Christmas Celebration", christmas_questions()),
                ("Baptism", baptism_questions()),
            ],
            default_questions: default_questions(),
        }
    }

    /// Returns the question set for an event type: exact key match first,
    /// then case-insensitive substring match in either direction, then
    /// the generic default set.
    pub fn questions_for(&self, event_type: &str) -> &[Question] {
        if let Some((_, questions)) = self
            .question_sets
            .iter()
            .find(|(key, _)| *key == event_type)
        {
            return questions;
        }
        let lower = event_type.trim().to_lowercase();
        if !lower.is_empty() {
            for (key, questions) in &self.question_sets {
                let key_lower = key.to_lowercase();
                if lower.contains(&key_lower) || key_lower.contains(&lower) {
                    return questions;
                }
            }
        }
        &self.default_questions
    }

    /// Assembles the full template list for a generation: base templates
    /// first, then the matching family's templates (if any). The order
    /// here is the tie-break order for equal deadlines.
    pub fn assemble_templates(&self, ctx: &TaskContext) -> Vec<TaskTemplate> {
        let mut templates = self.base_templates(ctx);
        if let Some(family) = match_family(ctx.event_type) {
            templates.extend(self.family_templates(family, ctx));
        }
        templates
    }

    /// Task templates common to every event. Lead times stretch for large
    /// events; venue share and invitation handling depend on the family.
    pub fn base_templates(&self, ctx: &TaskContext) -> Vec<TaskTemplate> {
        let large = ctx.is_large();
        let wedding = is_wedding(ctx.event_type);
        let corporate = is_corporate(ctx.event_type);

        let mut templates = vec![
            TaskTemplate::new(
                "Define event vision and objectives",
                MonthsBefore(if large { 8 } else { 6 }),
                CostBasis::Fixed(0.0),
                None,
                "Clearly outline the purpose, theme, and desired outcomes for your event",
            ),
            TaskTemplate::new(
                "Set detailed budget breakdown",
                MonthsBefore(if large { 8 } else { 6 }),
                CostBasis::Fixed(0.0),
                None,
                "Allocate budget across venue (30%), catering (25%), entertainment (15%), decor (10%), and other services",
            ),
            TaskTemplate::new(
                "Create comprehensive guest list",
                MonthsBefore(if large { 6 } else { 5 }),
                CostBasis::Fixed(0.0),
                None,
                "Consider family traditions, social obligations, and venue capacity when creating your list",
            ),
            TaskTemplate::new(
                "Research and book venue",
                MonthsBefore(if large { 6 } else { 4 }),
                CostBasis::BudgetShare(if wedding { 0.35 } else { 0.30 }),
                Some(Cat::Venues),
                "Consider location accessibility, parking, indoor/outdoor options, and cultural requirements",
            ),
            TaskTemplate::new(
                "Secure catering services",
                MonthsBefore(if large { 5 } else { 3 }),
                CostBasis::BudgetShare(0.25),
                Some(Cat::CateringAndSweets),
                "Plan menu considering dietary restrictions, cultural preferences, and seasonal ingredients",
            ),
        ];

        if wedding {
            templates.push(TaskTemplate::new(
                "Design and send save-the-dates",
                MonthsBefore(4),
                CostBasis::PerGuest(3.0),
                Some(Cat::InvitationsAndPrintables),
                "Send save-the-dates especially for destination guests or during busy seasons",
            ));
            templates.push(TaskTemplate::new(
                "Design and send formal invitations",
                MonthsBefore(2),
                CostBasis::PerGuest(8.0),
                Some(Cat::InvitationsAndPrintables),
                "Include RSVP cards, venue details, dress code, and cultural considerations",
            ));
        } else {
            templates.push(TaskTemplate::new(
                "Send invitations",
                WeeksBefore(if corporate { 6 } else { 4 }),
                CostBasis::PerGuest(if corporate { 2.0 } else { 5.0 }),
                Some(Cat::InvitationsAndPrintables),
                "Include all necessary event details and RSVP information",
            ));
        }

        templates.extend([
            TaskTemplate::new(
                "Plan menu and arrange tastings",
                MonthsBefore(2),
                CostBasis::Fixed(200.0),
                None,
                "Schedule tastings with caterer and finalize menu based on guest preferences",
            ),
            TaskTemplate::new(
                "Arrange transportation and accommodation",
                MonthsBefore(if large { 3 } else { 2 }),
                CostBasis::BudgetShare(0.05),
                Some(Cat::Transportation),
                "Coordinate guest transportation and book accommodations for out-of-town guests",
            ),
            TaskTemplate::new(
                "Finalize guest count and seating arrangements",
                WeeksBefore(3),
                CostBasis::Fixed(0.0),
                None,
                "Confirm final headcount and create detailed seating chart considering family dynamics",
            ),
            TaskTemplate::new(
                "Confirm all vendor details and timeline",
                WeeksBefore(1),
                CostBasis::Fixed(0.0),
                None,
                "Final confirmation calls with all vendors, review contracts and delivery schedules",
            ),
            TaskTemplate::new(
                "Prepare day-of emergency kit and timeline",
                DaysBefore(3),
                CostBasis::Fixed(100.0),
                None,
                "Create detailed timeline, emergency contacts list, and prepare backup plans",
            ),
            TaskTemplate::new(
                "Final vendor payments and gratuities",
                DaysBefore(1),
                CostBasis::BudgetShare(0.15),
                None,
                "Process final payments and prepare gratuity envelopes for service staff",
            ),
            // The only task scheduled after the event itself.
            TaskTemplate::new(
                "Send thank-you notes and follow-up",
                WeeksAfter(2),
                CostBasis::PerGuest(2.0),
                None,
                "Send personalized thank-you notes to guests and vendors, share photos if applicable",
            ),
        ]);

        templates
    }

    /// Task templates for a specialized family: answer-driven appends in
    /// catalog declaration order, then the family's unconditional tasks.
    pub fn family_templates(&self, family: EventFamily, ctx: &TaskContext) -> Vec<TaskTemplate> {
        let mut templates = Vec::new();
        match family {
            EventFamily::Wedding => {
                apply_answer_rules(WEDDING_RULES, ctx, &mut templates);
                templates.extend([
                    TaskTemplate::new(
                        "Shop for wedding attire and accessories",
                        MonthsBefore(4),
                        CostBasis::BudgetShare(0.10),
                        None,
                        "Purchase wedding dress, groom's attire, and accessories. Consider traditional elements if desired",
                    ),
                    TaskTemplate::new(
                        "Arrange pre-wedding celebrations (Henna night)",
                        WeeksBefore(2),
                        CostBasis::BudgetShare(0.05),
                        None,
                        "Plan intimate henna night celebration with close family and friends",
                    ),
                    TaskTemplate::new(
                        "Obtain marriage license and documentation",
                        WeeksBefore(4),
                        CostBasis::Fixed(100.0),
                        None,
                        "Complete all legal requirements and religious documentation for marriage",
                    ),
                    TaskTemplate::new(
                        "Plan honeymoon and post-wedding arrangements",
                        MonthsBefore(2),
                        CostBasis::BudgetShare(0.08),
                        None,
                        "Book honeymoon destination and arrange post-wedding logistics",
                    ),
                ]);
            }
            EventFamily::Corporate => {
                apply_answer_rules(CORPORATE_RULES, ctx, &mut templates);
                templates.extend([
                    TaskTemplate::new(
                        "Develop event agenda and content",
                        MonthsBefore(3),
                        CostBasis::Fixed(0.0),
                        None,
                        "Create detailed schedule, session topics, and speaker coordination",
                    ),
                    TaskTemplate::new(
                        "Set up registration and attendee management",
                        MonthsBefore(2),
                        CostBasis::Fixed(500.0),
                        None,
                        "Create registration system, manage RSVPs, and prepare attendee materials",
                    ),
                    TaskTemplate::new(
                        "Coordinate security and logistics",
                        WeeksBefore(2),
                        CostBasis::BudgetShare(0.04),
                        Some(Cat::SecurityAndCrowdControl),
                        "Arrange security, crowd control, and event day logistics management",
                    ),
                ]);
            }
            EventFamily::Birthday => {
                apply_answer_rules(BIRTHDAY_RULES, ctx, &mut templates);
            }
            EventFamily::Religious => {
                apply_answer_rules(RELIGIOUS_RULES, ctx, &mut templates);
            }
        }
        templates
    }
}

fn question(id: &str, text: &str, options: &[&str], multi_select: bool) -> Question {
    Question {
        id: id.to_string(),
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        multi_select,
    }
}

fn wedding_questions() -> Vec<Question> {
    vec![
        question(
            "traditions",
            "Which Lebanese wedding traditions would you like to include?",
            &[
                "Traditional Zaffe Procession",
                "Dabke Performance",
                "Traditional Lebanese Cuisine",
                "Henna Night Celebration",
            ],
            true,
        ),
        question(
            "entertainment",
            "What type of entertainment do you prefer?",
            &[
                "Live Arabic Music Band",
                "DJ with Mixed Music",
                "Traditional Folk Performers",
                "Modern Band",
            ],
            true,
        ),
        question(
            "services",
            "Which professional services do you need?",
            &[
                "Professional Photography & Videography",
                "Elaborate Floral Arrangements",
                "Wedding Cake & Sweets Table",
                "Bridal Beauty Services",
            ],
            true,
        ),
        question(
            "scale",
            "What is the scale of your wedding?",
            &[
                "Intimate Family Gathering (50-100 guests)",
                "Traditional Lebanese Wedding (200-400 guests)",
                "Grand Celebration (400+ guests)",
            ],
            false,
        ),
    ]
}

fn corporate_questions() -> Vec<Question> {
    vec![
        question(
            "content",
            "What will your conference include?",
            &[
                "Keynote Speakers",
                "Panel Discussions",
                "Workshops & Breakout Sessions",
                "Networking Reception",
            ],
            true,
        ),
        question(
            "technology",
            "What technical requirements do you have?",
            &[
                "Audio/Visual Equipment",
                "Live Streaming Setup",
                "Interactive Presentation Tools",
                "Translation Services",
            ],
            true,
        ),
        question(
            "branding",
            "What branding and documentation do you need?",
            &[
                "Corporate Branding & Signage",
                "Professional Photography",
                "Event Recording",
                "Marketing Materials",
            ],
            true,
        ),
    ]
}

fn birthday_questions() -> Vec<Question> {
    vec![
        question(
            "type",
            "What type of birthday celebration is this?",
            &[
                "Children's Birthday Party",
                "Adult Birthday Party",
                "Milestone Birthday (18th, 21st, 30th, etc.)",
                "Surprise Party",
            ],
            false,
        ),
        question(
            "essentials",
            "What are the party essentials?",
            &[
                "Custom Birthday Cake",
                "Themed Decorations",
                "Entertainment & Activities",
                "Professional Photography",
            ],
            true,
        ),
        question(
            "extras",
            "What additional elements would you like?",
            &[
                "Party Favors & Gifts",
                "Live Music or DJ",
                "Catered Meal",
                "Photo Booth",
            ],
            true,
        ),
    ]
}

fn eid_questions() -> Vec<Question> {
    vec![
        question(
            "traditions",
            "Which Eid traditions will you include?",
            &[
                "Traditional Religious Decorations",
                "Traditional Cuisine",
                "Community Involvement",
                "Gift Exchange",
            ],
            true,
        ),
        question(
            "activities",
            "What activities will you organize?",
            &[
                "Children's Entertainment",
                "Traditional Music",
                "Community Prayer",
                "Charity Activities",
            ],
            true,
        ),
    ]
}

fn christmas_questions() -> Vec<Question> {
    vec![
        question(
            "traditions",
            "Which Christmas traditions will you include?",
            &[
                "Traditional Religious Decorations",
                "Traditional Cuisine",
                "Religious Ceremony Coordination",
                "Gift Exchange",
            ],
            true,
        ),
        question(
            "entertainment",
            "What entertainment will you provide?",
            &[
                "Christmas Carols",
                "Children's Activities",
                "Traditional Music",
                "Santa Claus Appearance",
            ],
            true,
        ),
    ]
}

fn baptism_questions() -> Vec<Question> {
    vec![
        question(
            "ceremony",
            "What aspects of the baptism will you organize?",
            &[
                "Religious Ceremony Coordination",
                "Traditional Religious Decorations",
                "Traditional Cuisine",
                "Professional Photography",
            ],
            true,
        ),
        question(
            "celebration",
            "How will you celebrate after the ceremony?",
            &[
                "Family Reception",
                "Community Gathering",
                "Traditional Sweets",
                "Keepsake Gifts",
            ],
            true,
        ),
    ]
}

fn default_questions() -> Vec<Question> {
    vec![
        question(
            "general",
            "What services do you need for your event?",
            &[
                "Professional Photography",
                "Entertainment",
                "Catering Services",
                "Decorations",
            ],
            true,
        ),
        question(
            "scale",
            "What is the scale of your event?",
            &[
                "Intimate Gathering (Under 50 guests)",
                "Medium Event (50-150 guests)",
                "Large Event (150+ guests)",
            ],
            false,
        ),
    ]
}
