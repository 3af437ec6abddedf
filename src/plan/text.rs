//! Static text for plan generation.
//!
//! The learning-plan template is the reference version: it asks the
//! downstream LLM to deliver the plan in 4-week chunks and to browse and
//! verify every link before citing it. Placeholders use `${name}` syntax
//! and each one names a field in the intake schema (`skillplan check`
//! verifies this).

/// Marker opening the extractable plan body in the generated text.
pub const PLAN_BEGIN_MARKER: &str = "---BEGIN LEARNING PLAN---";

/// Marker closing the extractable plan body in the generated text.
pub const PLAN_END_MARKER: &str = "---END LEARNING PLAN---";

/// Prefix of the warning returned when required fields are missing.
pub const REQUIRED_WARNING_PREFIX: &str = "⚠️ Please fill out all required fields: ";

/// Prefix of the error string returned when the template itself is malformed.
pub const RENDER_FAILURE_PREFIX: &str = "⚠️ Could not generate the plan: ";

/// First line of the generated text; every successful render starts here.
pub const TITLE_BLOCK: &str = "🎯 AI LEARNING PLAN REQUEST";

/// The reference learning-plan prompt template.
pub const LEARNING_PLAN_TEMPLATE: &str = "\
🎯 AI LEARNING PLAN REQUEST
===========================

You are an expert AI learning coach. Build a personalized, week-by-week AI
learning plan for the learner profiled below.

LEARNER PROFILE
---------------
Role: ${role}
Day-to-Day Responsibilities: ${responsibilities}
Weekly Learning Hours: ${weekly_hours}
Plan Duration (weeks): ${total_weeks}
Team Function: ${team_function}
Preferred Learning Style: ${learning_style}
Client Industry / Sector: ${industry}
Primary Persona Served: ${persona}
AI Tools Available: ${ai_tools}
Client-Approved Tools: ${client_tools}
Collaboration Tools in Use: ${collab_tools}
Learning Platforms Available: ${platforms}
Existing Tools and Skills: ${skills}
Goals for This Plan: ${goals}
Technical Comfort Level: ${tech_level}
Dream AI Use Case: ${use_case}

INSTRUCTIONS
------------
1. Produce a plan spanning exactly ${total_weeks} weeks at roughly
   ${weekly_hours} hours per week. Never exceed the weekly hour budget.
2. Deliver the plan in chunks of 4 weeks at a time. After each chunk, stop
   and ask \"Ready for the next 4 weeks?\" before continuing. Do not dump
   the whole plan in one response.
3. Browsing is REQUIRED: before recommending any course, video, or article,
   open the link and confirm it loads and matches your description. Never
   cite a resource you have not verified in this session. If a link cannot
   be verified, replace it with one that can.
4. Prefer resources on the learner's available platforms; fall back to
   free, reputable sources otherwise.
5. Anchor every week to the learner's role and responsibilities, and build
   toward the stated goals and the dream use case.
6. For each week list: a theme, resources with verified links, one hands-on
   exercise using tools the learner already has, and a checkpoint the
   learner can self-assess against.
7. Match the depth to the learner's technical comfort level. \"None
   provided\" means the learner skipped that question; make a sensible
   assumption and say so.
8. Wrap the finished plan between the exact markers below so it can be
   extracted programmatically.

---BEGIN LEARNING PLAN---
(place the full ${total_weeks}-week plan here, chunked as instructed)
---END LEARNING PLAN---

✅ End of request. Begin with the first 4-week chunk.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_starts_with_title_block() {
        assert!(LEARNING_PLAN_TEMPLATE.starts_with(TITLE_BLOCK));
    }

    #[test]
    fn test_template_carries_markers() {
        assert!(LEARNING_PLAN_TEMPLATE.contains(PLAN_BEGIN_MARKER));
        assert!(LEARNING_PLAN_TEMPLATE.contains(PLAN_END_MARKER));
        let begin = LEARNING_PLAN_TEMPLATE.find(PLAN_BEGIN_MARKER).unwrap();
        let end = LEARNING_PLAN_TEMPLATE.find(PLAN_END_MARKER).unwrap();
        assert!(begin < end);
    }

    #[test]
    fn test_template_enforces_chunking_and_browsing() {
        assert!(LEARNING_PLAN_TEMPLATE.contains("chunks of 4 weeks"));
        assert!(LEARNING_PLAN_TEMPLATE.contains("Browsing is REQUIRED"));
    }

    #[test]
    fn test_template_has_no_stray_dollar_escapes() {
        assert!(!LEARNING_PLAN_TEMPLATE.contains("$$"));
    }
}
