use hiring_tracker::tracker::{Applicant, Position, Projection, RejectionRate};

pub(crate) fn position_line(position: &Position) -> String {
    format!(
        "{} [{}] {}",
        position.title, position.status, position.description
    )
}

pub(crate) fn applicant_line(applicant: &Applicant) -> String {
    let mut line = format!(
        "{} | {} | {} | {} | {} ({})",
        applicant.name,
        applicant.phone,
        applicant.email,
        applicant.address,
        applicant.title(),
        applicant.status()
    );
    if let Some(url) = applicant.profile_url.as_deref() {
        line.push_str(" | ");
        line.push_str(url);
    }
    line
}

pub(crate) fn render_positions(positions: Projection<'_, Position>) {
    if positions.is_empty() {
        println!("No positions listed");
        return;
    }
    println!("{} position(s) listed", positions.len());
    for (index, position) in positions.iter().enumerate() {
        println!("{}. {}", index + 1, position_line(position));
    }
}

pub(crate) fn render_applicants(applicants: Projection<'_, Applicant>) {
    if applicants.is_empty() {
        println!("No applicants listed");
        return;
    }
    println!("{} applicant(s) listed", applicants.len());
    for (index, applicant) in applicants.iter().enumerate() {
        println!("{}. {}", index + 1, applicant_line(applicant));
    }
}

pub(crate) fn rejection_rate_line(rate: &RejectionRate) -> String {
    format!(
        "- {}: {}/{} rejected ({:.2}%)",
        rate.title,
        rate.rejected,
        rate.total,
        rate.percentage()
    )
}

pub(crate) fn render_rejection_rates(rates: &[RejectionRate]) {
    if rates.is_empty() {
        println!("Rejection rates: no positions");
        return;
    }
    println!("Rejection rates");
    for rate in rates {
        println!("{}", rejection_rate_line(rate));
    }
}
