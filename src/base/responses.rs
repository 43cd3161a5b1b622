//! Static response, room, and keyword tables.

/// Trigger phrases and their responses.
///
/// Keys are lowercase and hold one or two words.
pub const RESPONSES: &[(&str, &str)] = &[
    // Security incidents.
    ("fire", "🔥 Fire department alerted."),
    ("intruder", "🚨 Security team alerted."),
    ("suspicious activity", "🔍 Security team monitoring the area."),
    ("theft", "🚔 Security team investigating reported theft."),
    ("vandalism", "🚧 Incident logged: Property damage detected."),
    ("lost item", "🛠️ Lost item reported. Security will assist in locating it."),
    ("unauthorized vehicle", "🚗 Security team alerted about an unauthorized vehicle."),
    ("harassment", "⚠️ Incident reported. Security and HR teams have been notified."),
    ("active shooter", "⚠️ Active shooter alert. Lockdown procedures activated. Call 911 immediately."),
    // Medical emergencies.
    ("heart attack", "🩺 Medical team alerted for a possible heart attack. Perform CPR if necessary."),
    ("stroke", "🚑 Emergency response team dispatched for possible stroke symptoms."),
    ("seizure", "⚕️ Medical assistance is on the way for seizure response."),
    ("choking", "🚑 Heimlich maneuver may be required. Emergency responders notified."),
    ("unconscious", "🚑 Medical team alerted. Check for breathing and pulse."),
    ("bleeding", "🩸 Apply direct pressure to the wound. Medical help is on the way."),
    ("fracture", "🦴 Medical assistance dispatched for possible fracture."),
    ("burn", "🔥 Emergency responders alerted for burn injury."),
    ("allergic reaction", "⚕️ Medical team dispatched for severe allergic reaction."),
];

/// Returned when nothing in the input matches a trigger phrase.
pub const DEFAULT_RESPONSE: &str = "❓ Please specify the type of incident clearly.";

/// Returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Security Chatbot API! Use the /chatbot endpoint to send messages.";

/// Known rooms and where to find them, checked in order.
pub const ROOM_LOCATIONS: &[(&str, &str)] = &[
    ("bella ciao room", "B3 2nd Floor"),
    ("conference hall", "Building A, Ground Floor"),
    ("security office", "Main Entrance, First Floor"),
];

/// Substrings that mark a query as a reportable security incident.
pub const INCIDENT_KEYWORDS: &[&str] = &["incident", "report", "fire", "security breach", "unauthorized access", "intruder"];

/// Acknowledgement returned once an incident has been reported.
pub const INCIDENT_ACKNOWLEDGEMENT: &str = "Incident reported! Security has been notified via email.";

/// Returned by the incident report handler when neither a room nor an incident is recognized.
pub const QUERY_PROCESSED: &str = "Your query has been processed.";

/// Subject line of the incident notification email.
pub const INCIDENT_SUBJECT: &str = "🚨 Security Incident Reported!";

/// Body of the incident notification email.
pub fn incident_body(query: &str) -> String {
    format!("A new security incident has been reported: {query}.\n\nPlease check immediately.")
}
