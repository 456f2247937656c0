//! The shipped campus topic table, fallback guidance, greeting, and
//! quick-action set. Response texts carry display-only markdown markers
//! (emphasis, bullets, emoji) that the rendering layer interprets.

use super::base::{KnowledgeBase, TopicEntry, TopicId};

/// Opening message that seeds a new conversation.
pub const ASSISTANT_GREETING: &str = "👋 Hello! I'm your Smart Campus Assistant. I'm here to help \
     you with information about schedules, facilities, dining, library services, and \
     administrative procedures. What would you like to know about campus today?";

/// Reply used when no topic's keywords match; lists the supported topics.
pub const GENERAL_FALLBACK: &str = "🤔 I'd be happy to help you with that! I specialize in \
     information about:\n\n\
     📅 **Class Schedules & Academic Calendar**\n\
     🏛️ **Campus Facilities & Locations**\n\
     🍽️ **Dining Services & Hours**\n\
     📚 **Library Resources & Services**\n\
     📋 **Administrative Procedures**\n\n\
     Could you please ask me something more specific about any of these topics?";

/// A UI-level shortcut that stands in for a free-text query about one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Button caption shown by the rendering layer.
    pub label: &'static str,
    pub topic: TopicId,
}

const QUICK_ACTIONS: [QuickAction; 5] = [
    QuickAction { label: "Class Schedule", topic: TopicId::Schedules },
    QuickAction { label: "Campus Map", topic: TopicId::Facilities },
    QuickAction { label: "Dining Hours", topic: TopicId::Dining },
    QuickAction { label: "Library Info", topic: TopicId::Library },
    QuickAction { label: "Admin Services", topic: TopicId::Administration },
];

/// The fixed quick-action set, in display order.
pub fn quick_actions() -> &'static [QuickAction] {
    &QUICK_ACTIONS
}

/// Builds the shipped campus knowledge base. Scan order is significant and
/// matches [`TopicId::all`]: schedules, facilities, dining, library,
/// administration.
pub fn campus_knowledge() -> KnowledgeBase {
    let entries = vec![
        TopicEntry::new(
            TopicId::Schedules,
            ["schedule", "class", "time", "semester", "calendar", "when"],
            [
                "📅 **Fall 2024 Semester Schedule:**\n\n\
                 • **Classes Begin:** August 28, 2024\n\
                 • **Labor Day Holiday:** September 2 (No Classes)\n\
                 • **Midterm Exams:** October 14-18\n\
                 • **Thanksgiving Break:** November 25-29\n\
                 • **Final Exams:** December 9-13\n\
                 • **Winter Break:** December 14 - January 15\n\n\
                 Need specific class schedules? Check your student portal or ask for your \
                 department's timetable!",
                "🕒 **Library Hours:**\n\n\
                 • **Monday-Thursday:** 7:00 AM - 11:00 PM\n\
                 • **Friday:** 7:00 AM - 8:00 PM\n\
                 • **Saturday:** 9:00 AM - 6:00 PM\n\
                 • **Sunday:** 11:00 AM - 11:00 PM\n\n\
                 📚 Extended hours during finals week!",
            ],
        ),
        TopicEntry::new(
            TopicId::Facilities,
            ["facility", "building", "location", "where", "find", "gym", "library", "lab"],
            [
                "🏛️ **Main Campus Facilities:**\n\n\
                 🏢 **Academic Buildings:**\n\
                 • Science Hall - Labs & Research\n\
                 • Liberal Arts Center - Humanities Classes\n\
                 • Business Complex - MBA & Undergraduate Programs\n\
                 • Engineering Building - Tech Labs & Workshops\n\n\
                 🏃 **Recreation:**\n\
                 • Campus Gym - Full fitness center\n\
                 • Pool Complex - Olympic-size pool\n\
                 • Tennis Courts - 6 courts available\n\
                 • Running Track - 400m outdoor track",
                "📍 **Campus Map Highlights:**\n\n\
                 • **Student Center** - Main hub for dining & services\n\
                 • **Health Center** - Medical services & counseling\n\
                 • **Career Services** - Job placement & internships\n\
                 • **IT Help Desk** - Technology support\n\
                 • **Parking Decks** - A, B, C (visitor parking available)\n\n\
                 Need directions? I can help you navigate between buildings!",
            ],
        ),
        TopicEntry::new(
            TopicId::Dining,
            ["food", "dining", "eat", "meal", "restaurant", "cafe", "hungry"],
            [
                "🍽️ **Campus Dining Options:**\n\n\
                 🏪 **Main Dining Hall:**\n\
                 • Breakfast: 7:00 AM - 10:00 AM\n\
                 • Lunch: 11:30 AM - 2:00 PM\n\
                 • Dinner: 5:00 PM - 8:00 PM\n\n\
                 ☕ **Campus Cafés:**\n\
                 • Central Café (Student Center) - Open 24/7\n\
                 • Library Café - 8:00 AM - 10:00 PM\n\
                 • Engineering Café - 7:00 AM - 6:00 PM",
                "🥗 **Today's Specials:**\n\n\
                 • **Grill Station:** Burgers & sandwiches\n\
                 • **International:** Asian stir-fry bar\n\
                 • **Healthy Choice:** Fresh salads & wraps\n\
                 • **Pizza Corner:** Fresh made-to-order pizzas\n\
                 • **Dessert Bar:** Daily fresh pastries\n\n\
                 💳 Meal plans and dining dollars accepted at all locations!",
            ],
        ),
        TopicEntry::new(
            TopicId::Library,
            ["library", "book", "study", "research", "quiet", "computer"],
            [
                "📚 **Library Services:**\n\n\
                 🔍 **Research Support:**\n\
                 • Librarian consultations available\n\
                 • Database access (24/7 online)\n\
                 • Interlibrary loan services\n\
                 • Citation help & writing support\n\n\
                 💻 **Study Spaces:**\n\
                 • 200+ computer stations\n\
                 • Group study rooms (bookable online)\n\
                 • Silent study floors (3rd & 4th)\n\
                 • 24/7 study lounge",
                "📖 **Library Resources:**\n\n\
                 • **Physical Collection:** 500,000+ books\n\
                 • **Digital Access:** E-books & journals\n\
                 • **Special Collections:** Rare books & archives\n\
                 • **Equipment Loans:** Laptops, chargers, calculators\n\
                 • **Printing Services:** Black & white, color printing\n\n\
                 🎧 Need a quiet space? Try our meditation pods on the 2nd floor!",
            ],
        ),
        TopicEntry::new(
            TopicId::Administration,
            ["admin", "office", "registration", "transcript", "financial", "aid", "tuition"],
            [
                "🏛️ **Administrative Services:**\n\n\
                 📋 **Registrar's Office:**\n\
                 • Transcript requests\n\
                 • Enrollment verification\n\
                 • Grade changes & appeals\n\
                 • Graduation applications\n\
                 • **Hours:** Mon-Fri 8:00 AM - 5:00 PM\n\n\
                 💰 **Financial Aid:**\n\
                 • FAFSA assistance\n\
                 • Scholarship information\n\
                 • Payment plan options\n\
                 • Emergency financial assistance",
                "📞 **Important Contacts:**\n\n\
                 • **Admissions:** (555) 123-4567\n\
                 • **Financial Aid:** (555) 123-4568\n\
                 • **Registrar:** (555) 123-4569\n\
                 • **IT Support:** (555) 123-4570\n\
                 • **Campus Safety:** (555) 123-4571\n\n\
                 🌐 Most services also available online through the student portal!",
            ],
        ),
    ];

    KnowledgeBase::new(entries, GENERAL_FALLBACK)
        .expect("shipped campus table satisfies the knowledge invariants")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_table_scan_order() {
        let base = campus_knowledge();
        let order: Vec<TopicId> = base.topics().collect();
        assert_eq!(order, TopicId::all().to_vec());
    }

    #[test]
    fn test_every_topic_entry_is_populated() {
        let base = campus_knowledge();
        for topic in TopicId::all() {
            let entry = base.topic(topic.id()).expect("topic present");
            assert!(!entry.keywords.is_empty(), "{} has no keywords", topic);
            assert_eq!(entry.responses.len(), 2, "{} should carry two responses", topic);
        }
    }

    #[test]
    fn test_library_hours_question_prefers_schedules() {
        // "time" (schedules) and "library" (facilities, library) both occur;
        // schedules is scanned first.
        let base = campus_knowledge();
        let entry = base.resolve("What time is the library open");
        assert_eq!(entry.topic, TopicId::Schedules);
    }

    #[test]
    fn test_fallback_lists_supported_topics() {
        let base = campus_knowledge();
        let entry = base.resolve("who won the football game");
        assert_eq!(entry.topic, TopicId::General);
        for topic in TopicId::all() {
            assert!(
                entry.responses[0].contains(topic.label()),
                "fallback should mention '{}'",
                topic.label()
            );
        }
    }

    #[test]
    fn test_quick_actions_cover_known_topics_in_order() {
        let base = campus_knowledge();
        let actions = quick_actions();
        assert_eq!(actions.len(), base.len());
        for (action, topic) in actions.iter().zip(TopicId::all()) {
            assert_eq!(action.topic, topic);
            assert!(base.topic(action.topic.id()).is_some());
        }
    }
}
