//! Built-in templates seeded into an empty catalog.

use super::Template;

/// Returns the fixed default template set, with fresh ids.
///
/// The order is the display order of a freshly seeded catalog.
#[must_use]
pub fn default_templates() -> Vec<Template> {
    vec![
        Template::new(
            "Executive Slack summary",
            "Write a concise Slack update for executive leadership summarizing the current \
             situation, key decisions, and next steps.",
        )
        .with_summary("Short Slack update to leadership with context, decisions, and next steps.")
        .with_icon_token("bubble.left.and.bubble.right.fill")
        .with_internal_note("Slack update to VP or GM about a project or decision.")
        .with_channel("Slack message")
        .with_audience("VP or GM and their staff.")
        .with_tone_and_style("Brief, direct, executive ready. No fluff.")
        .with_length_guidance("3 to 6 short paragraphs or bullet blocks, max 200 to 250 words.")
        .with_output_structure(
            "Start with one sentence headline, then 3 to 5 bullets: context, what changed or \
             was decided, and what happens next.",
        )
        .with_formatting_rules(
            "Use short paragraphs and bullets. Avoid markdown headings unless they add real \
             clarity.",
        )
        .with_constraints(
            "Do not restate basic company history. Focus on what is new, risky, or needs \
             attention.",
        )
        .with_persona(
            "You are a senior product manager reporting status to an executive sponsor.",
        ),
        Template::new(
            "Formal email",
            "Draft a clear and professional email that I can send directly after light editing.",
        )
        .with_summary("Polished email suitable for external or senior internal stakeholders.")
        .with_icon_token("envelope.fill")
        .with_internal_note("Structured email with greeting, clear ask, and close.")
        .with_channel("Email")
        .with_audience("Senior internal stakeholders or external partners.")
        .with_tone_and_style("Professional, concise, courteous.")
        .with_length_guidance("3 to 6 short paragraphs.")
        .with_output_structure(
            "Greeting, one paragraph of context, one paragraph that states the ask or decision, \
             supporting details, then a crisp closing.",
        )
        .with_formatting_rules(
            "No bullet lists unless truly needed. Keep line length comfortable on desktop and \
             mobile.",
        )
        .with_constraints("Avoid slang and emojis. Do not over-apologize.")
        .with_persona(
            "You are a senior PM or director representing an enterprise SaaS company.",
        ),
        Template::new(
            "Product requirements outline",
            "Create a structured product requirements outline for the described feature or \
             initiative.",
        )
        .with_summary("Structured PRD style outline that you can paste into a doc.")
        .with_icon_token("doc.text.fill")
        .with_internal_note("Outline for a PRD / spec that engineers and stakeholders can read.")
        .with_channel("PRD document")
        .with_audience("Engineers, PMs, designers, and technical stakeholders.")
        .with_tone_and_style("Clear, structured, and neutral. No marketing language.")
        .with_length_guidance("As long as needed, but in outline form.")
        .with_output_structure(
            "Sections for Overview, Problem / Opportunity, Goals and non-goals, Users and use \
             cases, Requirements, Open questions, Risks.",
        )
        .with_formatting_rules(
            "Use numbered headings and bullet lists where appropriate. Make section titles easy \
             to scan.",
        )
        .with_constraints(
            "Do not invent requirements that conflict with the context. Call out assumptions \
             explicitly.",
        )
        .with_persona("You are a product manager writing a first draft PRD."),
        Template::new(
            "Vision doc summary",
            "Write a narrative summary of the product vision described in my context.",
        )
        .with_summary("High level narrative about the future direction of a product.")
        .with_icon_token("lightbulb.fill")
        .with_internal_note("Narrative that explains a product vision and why it matters.")
        .with_channel("Vision document")
        .with_audience("Executives, cross functional partners, and senior ICs.")
        .with_tone_and_style("Aspirational but grounded. Clear and confident.")
        .with_length_guidance(
            "500 to 1000 words for a full vision; shorter if the context suggests a brief.",
        )
        .with_output_structure(
            "Opening that frames the problem and opportunity, then sections for Current state, \
             Future state, Key bets, and Impact.",
        )
        .with_formatting_rules(
            "Use headings and short paragraphs. Avoid long unbroken walls of text.",
        )
        .with_constraints(
            "Do not promise things that contradict the context. Make tradeoffs and risks \
             explicit.",
        )
        .with_persona("You are a product leader explaining a 1 to 3 year vision."),
        Template::new(
            "Hero slide content",
            "Summarize the key points from my context into content for a single hero slide.",
        )
        .with_summary("Content for a single slide that tells the story crisply.")
        .with_icon_token("rectangle.3.offgrid.fill")
        .with_internal_note("Generate content for a single slide that summarizes the story.")
        .with_channel("Presentation slide")
        .with_audience("Executive review audience.")
        .with_tone_and_style("Crisp and distilled. Each bullet should carry real signal.")
        .with_length_guidance("Title plus 3 to 5 bullets. Optionally one short takeaway line.")
        .with_output_structure(
            "Hero title, 3 to 5 bullets for key points, and an optional one line takeaway at the \
             bottom.",
        )
        .with_formatting_rules("Bullets should be short phrases, not full sentences where possible.")
        .with_constraints("Do not overload with detail. Avoid more than 5 bullets.")
        .with_persona("You are preparing content for an exec deck."),
        Template::new(
            "Find Slack person or conversation",
            "Search my Slack message history to find the specific person or conversation I am \
             referring to, based on the context I provide.",
        )
        .with_summary(
            "Use Slack AI to search my message history for a specific person or conversation \
             based on my description.",
        )
        .with_icon_token("magnifyingglass.circle")
        .with_internal_note(
            "Prompt for Slack AI to search my past conversations for a person or specific \
             discussion.",
        )
        .with_channel("Slack AI search")
        .with_audience("Me, using Slack AI to search my own workspace.")
        .with_tone_and_style(
            "Be concise and focused on actionable search results, not long explanations.",
        )
        .with_length_guidance(
            "Short reply: one or two sentences plus a compact list of matches.",
        )
        .with_output_structure(
            "Start with a brief statement of what you found, then list each likely match as a \
             bullet with person name, channel, approximate date, and one short summary line.",
        )
        .with_constraints(
            "Do not invent people or conversations that do not exist in my Slack workspace. If \
             you are not confident about a match, say so explicitly and ask for one clarifying \
             detail.",
        )
        .with_persona(
            "You are a helpful search assistant operating inside Slack, specialized in \
             searching my own message history.",
        )
        .with_examples(
            "For example, you might say: \"It looks like you are referring to Jane Doe in \
             #payments on March 3. Here are the top matches...\" followed by a short bulleted \
             list.",
        ),
    ]
}
