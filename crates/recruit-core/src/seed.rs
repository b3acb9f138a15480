//! Built-in seed data. Every invocation starts from this fixed set; there is
//! no persistence layer behind it.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::candidate::{
    Candidate, CandidateSource, CandidateStatus, Interview, InterviewKind, InterviewStatus,
};
use crate::interviewer::Interviewer;
use crate::messaging::{
    Alert, AlertKind, AlertPriority, AlertStatus, EmailKind, EmailRecord, EmailStatus,
    EmailTemplate, Notification, NotificationKind, NotificationStatus, Recipients,
};
use crate::schedule::{CalendarSlot, SlotKind};
use crate::store::Workspace;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed time is valid")
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamp is valid")
}

pub fn seed_workspace() -> Workspace {
    let interviewers = seed_interviewers();
    let ws = Workspace {
        candidates: seed_candidates(&interviewers),
        interviewers,
        slots: seed_slots(),
        templates: seed_templates(),
        alerts: seed_alerts(),
        notifications: seed_notifications(),
    };

    debug!(
        candidates = ws.candidates.len(),
        interviewers = ws.interviewers.len(),
        slots = ws.slots.len(),
        "seeded workspace"
    );
    ws
}

fn seed_interviewers() -> Vec<Interviewer> {
    vec![
        Interviewer::new(
            "i1".to_string(),
            "Sarah Johnson".to_string(),
            "sarah.j@company.com".to_string(),
            "Senior Developer".to_string(),
            "Engineering".to_string(),
        ),
        Interviewer::new(
            "i2".to_string(),
            "Mike Chen".to_string(),
            "mike.c@company.com".to_string(),
            "Tech Lead".to_string(),
            "Engineering".to_string(),
        ),
        Interviewer::new(
            "i3".to_string(),
            "Emily Davis".to_string(),
            "emily.d@company.com".to_string(),
            "HR Manager".to_string(),
            "Human Resources".to_string(),
        ),
        Interviewer::new(
            "i4".to_string(),
            "Alex Rodriguez".to_string(),
            "alex.r@company.com".to_string(),
            "Product Manager".to_string(),
            "Product".to_string(),
        ),
        Interviewer::new(
            "i5".to_string(),
            "Lisa Wang".to_string(),
            "lisa.w@company.com".to_string(),
            "Engineering Manager".to_string(),
            "Engineering".to_string(),
        ),
    ]
}

fn seed_candidates(interviewers: &[Interviewer]) -> Vec<Candidate> {
    let mut john = Candidate::new(
        "c1".to_string(),
        "John Smith".to_string(),
        "john.smith@email.com".to_string(),
        "Senior Frontend Developer".to_string(),
        CandidateSource::LinkedIn,
        date(2024, 1, 15),
    );
    john.phone = Some("+1-555-0123".to_string());
    john.status = CandidateStatus::InterviewScheduled;
    john.current_round = 2;
    john.total_rounds = 4;
    john.experience = "5 years".to_string();
    john.skills = vec![
        "React".to_string(),
        "TypeScript".to_string(),
        "Node.js".to_string(),
        "GraphQL".to_string(),
    ];
    john.updated = date(2024, 1, 20);
    john.interviews = vec![
        Interview {
            id: "int1".to_string(),
            candidate_id: "c1".to_string(),
            round: 1,
            kind: InterviewKind::PhoneScreening,
            date: date(2024, 1, 18),
            time: clock(10, 0),
            duration_minutes: 30,
            interviewers: vec![interviewers[2].clone()],
            status: InterviewStatus::Completed,
            rating: Some(4),
            feedback: Some("Good communication skills, strong technical background".to_string()),
            notes: None,
            meeting_link: None,
            location: None,
        },
        Interview {
            id: "int2".to_string(),
            candidate_id: "c1".to_string(),
            round: 2,
            kind: InterviewKind::Technical,
            date: date(2024, 1, 22),
            time: clock(14, 0),
            duration_minutes: 90,
            interviewers: vec![interviewers[0].clone(), interviewers[1].clone()],
            status: InterviewStatus::Scheduled,
            rating: None,
            feedback: None,
            notes: None,
            meeting_link: Some("https://meet.google.com/abc-defg-hij".to_string()),
            location: None,
        },
    ];
    john.email_history = vec![EmailRecord {
        id: "email1".to_string(),
        kind: EmailKind::Acknowledgment,
        recipient: "john.smith@email.com".to_string(),
        subject: "Application Received - Senior Frontend Developer".to_string(),
        sent: at(2024, 1, 15, 9, 30),
        status: EmailStatus::Opened,
    }];

    let mut maria = Candidate::new(
        "c2".to_string(),
        "Maria Garcia".to_string(),
        "maria.garcia@email.com".to_string(),
        "Product Manager".to_string(),
        CandidateSource::Indeed,
        date(2024, 1, 10),
    );
    maria.phone = Some("+1-555-0124".to_string());
    maria.status = CandidateStatus::FinalRound;
    maria.current_round = 3;
    maria.total_rounds = 3;
    maria.experience = "7 years".to_string();
    maria.skills = vec![
        "Product Strategy".to_string(),
        "Agile".to_string(),
        "Analytics".to_string(),
        "User Research".to_string(),
    ];
    maria.updated = date(2024, 1, 21);
    maria.interviews = vec![Interview {
        id: "int3".to_string(),
        candidate_id: "c2".to_string(),
        round: 3,
        kind: InterviewKind::Final,
        date: date(2024, 1, 23),
        time: clock(11, 0),
        duration_minutes: 60,
        interviewers: vec![interviewers[3].clone(), interviewers[4].clone()],
        status: InterviewStatus::Scheduled,
        rating: None,
        feedback: None,
        notes: None,
        meeting_link: None,
        location: Some("Conference Room A".to_string()),
    }];

    let mut david = Candidate::new(
        "c3".to_string(),
        "David Wilson".to_string(),
        "david.wilson@email.com".to_string(),
        "Backend Developer".to_string(),
        CandidateSource::Referral,
        date(2024, 1, 18),
    );
    david.status = CandidateStatus::Screening;
    david.experience = "3 years".to_string();
    david.skills = vec![
        "Python".to_string(),
        "Django".to_string(),
        "PostgreSQL".to_string(),
        "AWS".to_string(),
    ];
    david.updated = date(2024, 1, 19);

    let mut sarah = Candidate::new(
        "c4".to_string(),
        "Sarah Brown".to_string(),
        "sarah.brown@email.com".to_string(),
        "UX Designer".to_string(),
        CandidateSource::CompanyWebsite,
        date(2024, 1, 12),
    );
    sarah.status = CandidateStatus::DroppedOut;
    sarah.current_round = 2;
    sarah.experience = "4 years".to_string();
    sarah.skills = vec![
        "Figma".to_string(),
        "User Research".to_string(),
        "Prototyping".to_string(),
        "Design Systems".to_string(),
    ];
    sarah.updated = date(2024, 1, 20);

    let mut robert = Candidate::new(
        "c5".to_string(),
        "Robert Lee".to_string(),
        "robert.lee@email.com".to_string(),
        "DevOps Engineer".to_string(),
        CandidateSource::JobBoard,
        date(2024, 1, 8),
    );
    robert.status = CandidateStatus::Selected;
    robert.current_round = 4;
    robert.total_rounds = 4;
    robert.experience = "6 years".to_string();
    robert.skills = vec![
        "Kubernetes".to_string(),
        "Docker".to_string(),
        "AWS".to_string(),
        "Terraform".to_string(),
    ];
    robert.updated = date(2024, 1, 21);

    vec![john, maria, david, sarah, robert]
}

fn seed_slots() -> Vec<CalendarSlot> {
    let mut available = CalendarSlot::new(
        "s1".to_string(),
        date(2024, 1, 22),
        clock(9, 0),
        clock(10, 0),
        SlotKind::Available,
    );
    available.title = Some("Available for Technical Interviews".to_string());
    available.assigned_interviewers = vec!["i1".to_string(), "i2".to_string()];

    let mut team_meeting = CalendarSlot::new(
        "s2".to_string(),
        date(2024, 1, 22),
        clock(9, 0),
        clock(10, 0),
        SlotKind::Blocked,
    );
    team_meeting.title = Some("Team Meeting".to_string());
    team_meeting.assigned_interviewers = vec!["i1".to_string(), "i2".to_string()];

    let mut technical = CalendarSlot::new(
        "s3".to_string(),
        date(2024, 1, 22),
        clock(14, 0),
        clock(15, 30),
        SlotKind::Interview,
    );
    technical.title = Some("Technical Interview - John Smith".to_string());
    technical.assigned_interviewers = vec!["i1".to_string(), "i2".to_string()];
    technical.assigned_candidates = vec!["c1".to_string()];

    let mut final_round = CalendarSlot::new(
        "s4".to_string(),
        date(2024, 1, 23),
        clock(11, 0),
        clock(12, 0),
        SlotKind::Interview,
    );
    final_round.title = Some("Final Interview - Maria Garcia".to_string());
    final_round.assigned_interviewers = vec!["i4".to_string(), "i5".to_string()];
    final_round.assigned_candidates = vec!["c2".to_string()];

    let mut prep = CalendarSlot::new(
        "s5".to_string(),
        date(2024, 1, 24),
        clock(9, 0),
        clock(9, 30),
        SlotKind::Meeting,
    );
    prep.title = Some("Interview Prep Meeting".to_string());
    prep.assigned_interviewers = vec!["i3".to_string()];

    vec![available, team_meeting, technical, final_round, prep]
}

fn seed_templates() -> Vec<EmailTemplate> {
    vec![
        EmailTemplate {
            id: "t1".to_string(),
            name: "Application Acknowledgment".to_string(),
            kind: EmailKind::Acknowledgment,
            subject: "Application Received - {{position}}".to_string(),
            body: "Dear {{candidateName}},\n\n\
                   Thank you for your interest in the {{position}} role at our company. \
                   We have received your application and are currently reviewing it.\n\n\
                   We will be in touch within the next few days regarding the next steps \
                   in our hiring process.\n\n\
                   Best regards,\nRecruitment Team"
                .to_string(),
            variables: vec!["candidateName".to_string(), "position".to_string()],
        },
        EmailTemplate {
            id: "t2".to_string(),
            name: "Interview Invitation".to_string(),
            kind: EmailKind::InterviewInvite,
            subject: "Interview Invitation - {{position}} - Round {{round}}".to_string(),
            body: "Dear {{candidateName}},\n\n\
                   We are pleased to invite you for a {{interviewType}} interview for the \
                   {{position}} role.\n\n\
                   Interview Details:\n\
                   - Date: {{date}}\n\
                   - Time: {{time}}\n\
                   - Duration: {{duration}} minutes\n\
                   - Interviewer(s): {{interviewers}}\n\
                   - Location/Link: {{location}}\n\n\
                   Please confirm your availability by replying to this email.\n\n\
                   Best regards,\nRecruitment Team"
                .to_string(),
            variables: vec![
                "candidateName".to_string(),
                "position".to_string(),
                "round".to_string(),
                "interviewType".to_string(),
                "date".to_string(),
                "time".to_string(),
                "duration".to_string(),
                "interviewers".to_string(),
                "location".to_string(),
            ],
        },
    ]
}

fn seed_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "a1".to_string(),
            kind: AlertKind::Reminder,
            title: "Interview Reminder - John Smith".to_string(),
            message: "Technical interview scheduled for tomorrow at 2:00 PM".to_string(),
            recipients: Recipients {
                candidates: vec!["c1".to_string()],
                interviewers: vec!["i1".to_string(), "i2".to_string()],
                others: vec!["hr@company.com".to_string()],
            },
            scheduled: at(2024, 1, 21, 10, 0),
            status: AlertStatus::Sent,
            priority: AlertPriority::Medium,
            related_to: Some("Interview #INT-001".to_string()),
        },
        Alert {
            id: "a2".to_string(),
            kind: AlertKind::Delay,
            title: "Interview Postponed - Maria Garcia".to_string(),
            message: "Final round interview has been postponed to next week due to \
                      interviewer unavailability"
                .to_string(),
            recipients: Recipients {
                candidates: vec!["c2".to_string()],
                interviewers: vec!["i4".to_string(), "i5".to_string()],
                others: vec![],
            },
            scheduled: at(2024, 1, 20, 15, 30),
            status: AlertStatus::Sent,
            priority: AlertPriority::High,
            related_to: Some("Interview #INT-002".to_string()),
        },
    ]
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "n1".to_string(),
            kind: NotificationKind::Reminder,
            title: "Interview Reminder".to_string(),
            message: "Technical interview with John Smith scheduled for tomorrow at 2:00 PM"
                .to_string(),
            timestamp: at(2024, 1, 21, 10, 0),
            recipients: vec![
                "sarah.j@company.com".to_string(),
                "mike.c@company.com".to_string(),
                "john.smith@email.com".to_string(),
            ],
            status: NotificationStatus::Sent,
            related_to: Some("Interview #INT-001".to_string()),
        },
        Notification {
            id: "n2".to_string(),
            kind: NotificationKind::Delay,
            title: "Interview Delayed".to_string(),
            message: "Final round interview with Maria Garcia has been postponed to next week"
                .to_string(),
            timestamp: at(2024, 1, 20, 15, 30),
            recipients: vec![
                "maria.garcia@email.com".to_string(),
                "alex.r@company.com".to_string(),
                "lisa.w@company.com".to_string(),
            ],
            status: NotificationStatus::Sent,
            related_to: Some("Interview #INT-002".to_string()),
        },
        Notification {
            id: "n3".to_string(),
            kind: NotificationKind::Update,
            title: "Candidate Status Update".to_string(),
            message: "David Wilson has been moved to the next round".to_string(),
            timestamp: at(2024, 1, 19, 14, 15),
            recipients: vec!["hr@company.com".to_string()],
            status: NotificationStatus::Sent,
            related_to: Some("Candidate #CAN-003".to_string()),
        },
        Notification {
            id: "n4".to_string(),
            kind: NotificationKind::Alert,
            title: "Candidate Dropout".to_string(),
            message: "Sarah Brown has withdrawn from the UX Designer position".to_string(),
            timestamp: at(2024, 1, 20, 9, 45),
            recipients: vec![
                "hr@company.com".to_string(),
                "hiring.manager@company.com".to_string(),
            ],
            status: NotificationStatus::Sent,
            related_to: Some("Candidate #CAN-004".to_string()),
        },
    ]
}
