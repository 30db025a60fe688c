//! Turns the "WhatsApp sent" badge in the order history into a toggle.
//!
//! The order details component renders, for each history entry, a static
//! badge when a WhatsApp message was sent and, further down, the full message
//! text. After this recipe the badge becomes a button that expands or
//! collapses the message panel for that entry.

use crate::error::SpliceError;
use crate::insertion::GuardedInsertion;
use crate::pattern::PatternRule;
use crate::pipeline::Pipeline;
use crate::rewriter::RewriteRule;

/// Name reported for the recipe's pipeline.
pub const RECIPE_NAME: &str = "whatsapp-toggle";

/// Step name of the state declaration insertion.
pub const TOGGLE_STATE_STEP: &str = "toggle-state";
/// Step name of the badge rewrite.
pub const INDICATOR_STEP: &str = "indicator-button";
/// Step name of the message panel rewrite.
pub const MESSAGE_STEP: &str = "message-panel";

/// Declaration the toggle state is inserted after.
pub const STATE_ANCHOR: &str = "const [whatsappMessage, setWhatsappMessage] = useState('');";

/// Present only once the toggle state has been inserted.
pub const TOGGLE_MARKER: &str = "const toggleWaMsg";

/// Expanded-set state and the helper flipping one entry.
pub const TOGGLE_STATE: &str = r"
    const [expandedWaMsgs, setExpandedWaMsgs] = useState<Set<string>>(new Set());

    const toggleWaMsg = (id: string) => {
        setExpandedWaMsgs(prev => {
            const next = new Set(prev);
            if (next.has(id)) next.delete(id);
            else next.add(id);
            return next;
        });
    };";

/// The static badge shown when a WhatsApp message was sent.
pub const INDICATOR_PATTERN: &str = r"
{hist.waMsgSent ? (
    <span style={{
        display: 'inline-flex', alignItems: 'center', gap: '4px',
        padding: '2px 8px', borderRadius: '6px', fontSize: '10px', fontWeight: 700,
        background: 'rgba(37,211,102,0.15)', color: '#25d366',
        border: '1px solid rgba(37,211,102,0.2)'
    }} title={hist.waMsgContent}>
        <MessageCircle size={12} /> WhatsApp Enviado
    </span>";

/// Badge replacement: a button toggling the entry's message panel.
///
/// Kept byte for byte as earlier patch runs wrote it, trailing spaces included.
pub const INDICATOR_REPLACEMENT: &str = concat!(
    "{hist.waMsgSent ? (\n",
    "                                                                                     <button \n",
    "                                                                                        onClick={() => toggleWaMsg(hist.id)}\n",
    "                                                                                        style={{\n",
    "                                                                                            display: 'inline-flex', alignItems: 'center', gap: '4px',\n",
    "                                                                                            padding: '2px 8px', borderRadius: '6px', fontSize: '10px', fontWeight: 700,\n",
    "                                                                                            background: expandedWaMsgs.has(hist.id) ? '#25d366' : 'rgba(37,211,102,0.15)', \n",
    "                                                                                            color: expandedWaMsgs.has(hist.id) ? '#fff' : '#25d366',\n",
    "                                                                                            border: '1px solid rgba(37,211,102,0.2)',\n",
    "                                                                                            cursor: 'pointer'\n",
    "                                                                                        }} \n",
    "                                                                                     >\n",
    "                                                                                         <MessageCircle size={12} /> {expandedWaMsgs.has(hist.id) ? 'Ocultar WhatsApp' : 'WhatsApp Enviado'}\n",
    "                                                                                     </button>",
);

/// The always-visible message panel.
pub const MESSAGE_PATTERN: &str = r"
{hist.waMsgSent && hist.waMsgContent && hist.waMsgContent !== hist.comments && (
    <div style={{ marginTop: '8px', padding: '8px', background: 'rgba(37,211,102,0.05)', borderRadius: '6px', borderLeft: '3px solid #25d366', fontSize: '12px', color: 'rgba(255,255,255,0.5)', fontFamily: 'monospace', whiteSpace: 'pre-wrap' }}>
        {hist.waMsgContent}
    </div>
)}";

/// Panel replacement: only rendered while the entry is expanded.
pub const MESSAGE_REPLACEMENT: &str = concat!(
    "{hist.waMsgSent && hist.waMsgContent && hist.waMsgContent !== hist.comments && expandedWaMsgs.has(hist.id) && (\n",
    "                                                                     <div className=\"animate-fade\" style={{ \n",
    "                                                                        marginTop: '8px', padding: '12px', \n",
    "                                                                        background: 'rgba(37,211,102,0.08)', borderRadius: '8px', \n",
    "                                                                        borderLeft: '3px solid #25d366', fontSize: '12.5px', \n",
    "                                                                        color: 'rgba(255,255,255,0.7)', fontFamily: 'inherit', \n",
    "                                                                        whiteSpace: 'pre-wrap', position: 'relative' \n",
    "                                                                     }}>\n",
    "                                                                        <div style={{ fontSize: '10px', textTransform: 'uppercase', color: '#25d366', fontWeight: 800, marginBottom: '6px', opacity: 0.8 }}>\n",
    "                                                                            Conteúdo enviado via WhatsApp:\n",
    "                                                                        </div>\n",
    "                                                                         {hist.waMsgContent}\n",
    "                                                                     </div>\n",
    "                                                                 )}",
);

/// Builds the three-step toggle pipeline.
///
/// # Errors
///
/// Returns an error only if the embedded rules fail validation.
pub fn whatsapp_toggle() -> Result<Pipeline, SpliceError> {
    let toggle_state = GuardedInsertion::new(STATE_ANCHOR, TOGGLE_MARKER, TOGGLE_STATE)?;
    let indicator = RewriteRule::new(
        PatternRule::compile(INDICATOR_STEP, INDICATOR_PATTERN)?,
        INDICATOR_REPLACEMENT,
    )?;
    let message = RewriteRule::new(
        PatternRule::compile(MESSAGE_STEP, MESSAGE_PATTERN)?,
        MESSAGE_REPLACEMENT,
    )?;

    Ok(Pipeline::new(RECIPE_NAME)
        .with_insertion(TOGGLE_STATE_STEP, toggle_state)
        .with_rewrite(INDICATOR_STEP, indicator)
        .with_rewrite(MESSAGE_STEP, message))
}
