use jobindex_common::JobRecord;

pub(super) fn render(jobs: &[JobRecord]) -> String {
    if jobs.is_empty() {
        return "No job postings found.\n".to_string();
    }

    let mut lines = vec![format!("Total jobs: {}", jobs.len()), String::new()];
    for job in jobs {
        lines.push(job.headline().to_string());
        if let Some(company) = job.company() {
            lines.push(format!("  Company: {company}"));
        }
        if let Some(area) = job.area() {
            lines.push(format!("  Area: {area}"));
        }
        if let Some(distance) = job.distance_km() {
            lines.push(format!("  Distance: {distance:.1} km"));
        }
        if let Some(deadline) = job.apply_deadline() {
            lines.push(format!("  Deadline: {deadline}"));
        }
        if let Some(url) = job.apply_url() {
            lines.push(format!("  Apply: {url}"));
        }
        lines.push(String::new());
    }
    lines.push(String::new());
    lines.join("\n")
}
