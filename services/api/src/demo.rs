use crate::infra::InMemoryIntakeClient;
use academy_intake::error::AppError;
use academy_intake::intake::{
    DraftUpdate, IntakeSession, IntakeView, NavigationContext, Program, SCHEDULE_PATH,
};
use clap::Args;

const DEFAULT_DEMO_URL: &str = "/apply?program=Tutoring&cohort=demo";

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Page URL or origin-relative location, e.g. "/apply?program=Course&cohort=demo"
    pub(crate) url: String,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Page URL the intake session mounts on.
    #[arg(long, default_value = DEFAULT_DEMO_URL)]
    pub(crate) url: String,
    /// Tutoring subject to enter when the program is Tutoring.
    #[arg(long)]
    pub(crate) subject: Option<String>,
    /// Course to select when the URL did not preselect one.
    #[arg(long)]
    pub(crate) course: Option<String>,
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let context = NavigationContext::parse(&args.url)?;
    let session = IntakeSession::mount(&context, SCHEDULE_PATH);
    let view = IntakeView {
        demo_banner: session.draft().shows_demo_banner(),
        draft: session.draft().clone(),
    };

    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Resolved draft unavailable: {err}"),
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        url,
        subject,
        course,
    } = args;

    let context = NavigationContext::parse(&url)?;
    let client = InMemoryIntakeClient::default();
    let mut session = IntakeSession::mount(&context, SCHEDULE_PATH);

    println!("Application intake demo");
    println!("Page: {context}");
    println!(
        "Resolved: program {} | cohort {}",
        session.resolved().program,
        session.resolved().cohort.as_str()
    );
    if session.draft().shows_demo_banner() {
        println!("Banner: free demo cohort");
    }

    for update in demo_updates(session.draft().program(), subject, course) {
        session.update(update);
    }

    let target = match session.submit(&client).await {
        Ok(target) => target,
        Err(err) => {
            println!("Submission rejected: {err}");
            return Ok(());
        }
    };

    for payload in client.received() {
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("Submitted payload:\n{json}"),
            Err(err) => println!("Submitted payload unavailable: {err}"),
        }
    }
    println!("Redirect: {target}");

    Ok(())
}

fn demo_updates(
    program: Program,
    subject: Option<String>,
    course: Option<String>,
) -> Vec<DraftUpdate> {
    let mut updates = vec![
        DraftUpdate::FirstName("Jordan".to_string()),
        DraftUpdate::LastName("Rivera".to_string()),
        DraftUpdate::Email("jordan@example.com".to_string()),
        DraftUpdate::Phone("555-0142".to_string()),
        DraftUpdate::City("Atlanta".to_string()),
        DraftUpdate::Daw("Ableton Live".to_string()),
        DraftUpdate::EmailConsent(true),
    ];

    match program {
        Program::Course => {
            if let Some(course) = course {
                updates.push(DraftUpdate::Course(course));
            }
        }
        Program::Tutoring => {
            let subject = subject.unwrap_or_else(|| "Mixing and mastering".to_string());
            updates.push(DraftUpdate::TutoringSubject(subject));
        }
        Program::Membership => {}
    }

    updates
}
