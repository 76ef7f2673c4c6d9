use crate::components::daisy_ui::{Alert, Badge, Button, Card, DaisyColor, DaisySize, Input};
use crate::dom;
use crate::hooks::use_cancel_token;
use pokebot_core::pokedex::CancelToken;
use pokebot_core::terminal::{
    BotStatus, OPERATION_DELAY_MS, TerminalCommand, TerminalEntry, TerminalEntryKind,
    TerminalSession,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

const UNKNOWN_COMMAND: &str = "Unknown command. Try !ping, !status or !help.";

fn status_color(status: BotStatus) -> DaisyColor {
    match status {
        BotStatus::Running => DaisyColor::Success,
        BotStatus::Stopped => DaisyColor::Error,
        BotStatus::Starting | BotStatus::Stopping => DaisyColor::Warning,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TerminalLogProps {
    pub entries: Vec<TerminalEntry>,
}

#[function_component(TerminalLog)]
pub fn terminal_log(p: &TerminalLogProps) -> Html {
    html! {
        <div
            id="terminal-log"
            class="h-80 overflow-y-auto rounded bg-neutral p-3 font-mono text-sm text-neutral-content"
            role="log"
            aria-live="polite"
        >
            if p.entries.is_empty() {
                <p class="opacity-60">{"No output yet."}</p>
            }
            { for p.entries.iter().map(|entry| {
                let tone = match entry.kind {
                    TerminalEntryKind::Command => "text-info",
                    TerminalEntryKind::System => "text-success",
                    TerminalEntryKind::Error => "text-error",
                };
                html! {
                    <div key={entry.id} class="terminal-entry">
                        <span class="opacity-60">{ format!("[{}] ", entry.timestamp) }</span>
                        if let (Some(user), Some(command)) = (&entry.username, &entry.command) {
                            <span class="font-semibold">{ format!("{user}: {command} ") }</span>
                        }
                        <span class={tone}>{ entry.text.clone() }</span>
                    </div>
                }
            }) }
        </div>
    }
}

/// Runs `before`, waits the mock delay, then runs `after` unless the page is gone.
fn run_delayed(
    session: &Rc<RefCell<TerminalSession>>,
    redraw: &UseForceUpdateHandle,
    cancel: &CancelToken,
    before: impl FnOnce(&mut TerminalSession) -> bool,
    after: impl FnOnce(&mut TerminalSession) + 'static,
) {
    let proceed = before(&mut session.borrow_mut());
    redraw.force_update();
    if !proceed {
        return;
    }
    let session = Rc::clone(session);
    let redraw = redraw.clone();
    let cancel = cancel.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = dom::sleep_ms(OPERATION_DELAY_MS).await {
            log::warn!("Timer failed: {}", dom::js_error_message(&err));
        }
        if cancel.is_cancelled() {
            return;
        }
        after(&mut session.borrow_mut());
        redraw.force_update();
    });
}

#[function_component(ControlTerminalPage)]
pub fn control_terminal_page() -> Html {
    let session = use_mut_ref(TerminalSession::new);
    let redraw = use_force_update();
    let cancel = use_cancel_token();
    let input = use_state(String::new);
    let input_error = use_state(|| None::<AttrValue>);

    let status = session.borrow().status();
    let entries = session.borrow().log().to_vec();

    let on_start = {
        let (session, redraw, cancel) = (session.clone(), redraw.clone(), cancel.clone());
        Callback::from(move |_: MouseEvent| {
            run_delayed(
                &session,
                &redraw,
                &cancel,
                |s| s.begin_start(dom::local_time()).is_ok(),
                |s| s.finish_start(dom::local_time()),
            );
        })
    };
    let on_stop = {
        let (session, redraw, cancel) = (session.clone(), redraw.clone(), cancel.clone());
        Callback::from(move |_: MouseEvent| {
            run_delayed(
                &session,
                &redraw,
                &cancel,
                |s| s.begin_stop(dom::local_time()).is_ok(),
                |s| s.finish_stop(dom::local_time()),
            );
        })
    };
    let send = {
        let (session, redraw, cancel) = (session.clone(), redraw.clone(), cancel.clone());
        Callback::from(move |command: TerminalCommand| {
            run_delayed(
                &session,
                &redraw,
                &cancel,
                |s| s.send(command, dom::local_time()).is_ok(),
                move |s| s.complete(command, dom::local_time()),
            );
        })
    };
    let on_input = {
        let input = input.clone();
        let input_error = input_error.clone();
        Callback::from(move |value: String| {
            input_error.set(None);
            input.set(value);
        })
    };
    let on_submit = {
        let input = input.clone();
        let input_error = input_error.clone();
        let send = send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if input.trim().is_empty() {
                return;
            }
            match TerminalCommand::parse(&input) {
                Some(command) => {
                    send.emit(command);
                    input.set(String::new());
                }
                None => input_error.set(Some(AttrValue::from(UNKNOWN_COMMAND))),
            }
        })
    };
    let on_clear = {
        let (session, redraw) = (session.clone(), redraw.clone());
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().clear();
            redraw.force_update();
        })
    };
    let on_dismiss_error = {
        let input_error = input_error.clone();
        Callback::from(move |()| input_error.set(None))
    };

    html! {
        <div class="space-y-6" id="control-terminal">
            <Card
                title="Bot Control"
                header_actions={html! {
                    <Badge
                        class="bot-status"
                        variant={status_color(status)}
                        label={status.label()}
                    />
                }}
            >
                <div class="flex flex-wrap gap-2">
                    <Button
                        id="start-bot"
                        variant={DaisyColor::Success}
                        disabled={status != BotStatus::Stopped}
                        busy={status == BotStatus::Starting}
                        label="Start Bot"
                        onclick={on_start}
                    />
                    <Button
                        id="stop-bot"
                        variant={DaisyColor::Error}
                        disabled={status != BotStatus::Running}
                        busy={status == BotStatus::Stopping}
                        label="Stop Bot"
                        onclick={on_stop}
                    />
                </div>
            </Card>
            <Card
                title="Terminal"
                header_actions={html! {
                    <Button
                        size={DaisySize::Sm}
                        variant={DaisyColor::Ghost}
                        label="Clear"
                        onclick={on_clear}
                    />
                }}
            >
                <TerminalLog entries={entries} />
                if let Some(message) = (*input_error).clone() {
                    <Alert
                        variant={DaisyColor::Error}
                        message={message}
                        on_dismiss={on_dismiss_error}
                    />
                }
                <form class="flex gap-2" onsubmit={on_submit}>
                    <Input
                        id="terminal-input"
                        class="flex-1 font-mono"
                        placeholder="Type a command, e.g. !ping"
                        value={AttrValue::from((*input).clone())}
                        disabled={status.is_busy()}
                        oninput={on_input}
                    />
                    <Button button_type="submit" variant={DaisyColor::Primary} label="Send" />
                </form>
                <div class="flex flex-wrap gap-2">
                    { for TerminalCommand::ALL.into_iter().map(|command| {
                        let send = send.clone();
                        html! {
                            <Button
                                size={DaisySize::Sm}
                                outline={true}
                                label={command.to_string()}
                                onclick={Callback::from(move |_: MouseEvent| send.emit(command))}
                            />
                        }
                    }) }
                </div>
            </Card>
        </div>
    }
}
